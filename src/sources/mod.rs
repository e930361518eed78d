pub mod kubetoken;
pub mod session;
