//! Workspace tooling package. Carries the rusty-hook pre-commit configuration;
//! the shipyard code lives under `crates/`.
