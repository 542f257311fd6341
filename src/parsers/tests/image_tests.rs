use crate::parsers::html::extract_embedded_image_urls;

#[test]
fn test_no_images() {
    assert!(extract_embedded_image_urls("").is_empty());
    assert!(
        extract_embedded_image_urls("Just a description [link](https://example.com)").is_empty()
    );
}

#[test]
fn test_extra_attributes_before_and_after_src() {
    let body = r#"<img width="100" src="https://example.com/image.png" alt="x">"#;
    assert_eq!(
        extract_embedded_image_urls(body),
        vec!["https://example.com/image.png"]
    );
}

#[test]
fn test_images_keep_order() {
    let body = r#"Before <img src="https://example.com/img1.png"> middle
<img alt="second" src='https://example.com/img2.jpg' /> after"#;
    assert_eq!(
        extract_embedded_image_urls(body),
        vec![
            "https://example.com/img1.png",
            "https://example.com/img2.jpg"
        ]
    );
}

#[test]
fn test_duplicates_are_preserved() {
    let body = r#"<img src="https://example.com/a.png"><img src="https://example.com/a.png">"#;
    assert_eq!(extract_embedded_image_urls(body).len(), 2);
}

#[test]
fn test_spaces_around_equals() {
    let body = r#"<img src = "https://user-images.githubusercontent.com/1/abc.png">"#;
    assert_eq!(
        extract_embedded_image_urls(body),
        vec!["https://user-images.githubusercontent.com/1/abc.png"]
    );
}

#[test]
fn test_rejects_unquoted_and_relative_sources() {
    let body = concat!(
        r#"<img src=https://example.com/a.png> "#,
        r#"<img src="/static/b.png"> "#,
        r#"<img src="data:image/png;base64,AAAA">"#
    );
    assert!(extract_embedded_image_urls(body).is_empty());
}
