pub mod client;
pub mod environments;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::OctomindClient;
pub use environments::provision_environment;
pub use types::{
    BasicAuth, BatchGenerationRequest, BatchGenerationResponse, Environment, EnvironmentType,
    GenerationContext, NewEnvironment, PrivateLocation, TestAccount,
};
