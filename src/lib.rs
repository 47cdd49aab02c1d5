//! Permissive URL decomposition for links found in the wild.
//!
//! [`decompose`] splits any string into scheme, double slash marker, opaque
//! part, authority, userinfo, host, port, path, query and fragment. Nothing is
//! rejected and nothing is decoded; components that are missing are empty.
//!
//! ```
//! let url = laxurl::decompose("localhost:8080").unwrap();
//! assert_eq!(url.scheme(), "");
//! assert_eq!(url.host(), "localhost");
//! assert_eq!(url.port(), "8080");
//!
//! let url = laxurl::decompose("../viewtopic.php?t=1045").unwrap();
//! assert_eq!(url.path(), "../viewtopic.php");
//! assert_eq!(url.query(), "t=1045");
//! assert!(url.is_relative());
//! ```

// Decomposition pipeline
mod authority;
mod decomposer;
mod host;
mod patterns;
mod primitive;
mod split;
mod url;

mod checkers;
mod error;

// Normalization boundary
#[cfg(feature = "normalize")]
mod character_sets;
#[cfg(feature = "normalize")]
mod generic;
#[cfg(feature = "normalize")]
mod ipv4;
#[cfg(feature = "normalize")]
mod normalize;
#[cfg(feature = "normalize")]
mod scheme;
#[cfg(feature = "normalize")]
mod unicode;

// Public API
pub use decomposer::{
    DEFAULT_FILENAME_EXTENSIONS, DEFAULT_RESERVED_SCHEMES, Decomposer, decompose, split,
};
pub use error::{Error, Result};
pub use primitive::is_primitive_path;
pub use split::Components;
pub use url::{Url, Userinfo};

#[cfg(feature = "normalize")]
pub use enumset::{EnumSet, enum_set};
#[cfg(feature = "normalize")]
pub use generic::GenericUrl;
#[cfg(feature = "normalize")]
pub use normalize::{DEFAULT_NORMALIZATION, Normalization, Normalizer, normalize_str};
