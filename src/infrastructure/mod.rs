pub mod artifact_loader;
