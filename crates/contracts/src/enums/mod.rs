pub mod provider_kind;

pub use provider_kind::ProviderKind;
