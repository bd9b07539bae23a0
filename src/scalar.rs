//! Scalar decoder registry and the WordPress timestamp scalar.
//!
//! Leaf fields are converted from raw text through [`ScalarRegistry`]:
//! a registered decoder wins, otherwise the type's natural `FromStr`
//! parsing is used. The one domain-specific decoder is [`WpTime`], the
//! `pubDate` format used by WXR exports.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

type BoxedDecoder = Box<dyn Fn(&str) -> Result<Box<dyn Any>, String> + Send + Sync>;

/// Registry mapping scalar types to custom text decoders.
///
/// Types without a registered decoder fall back to their `FromStr`
/// implementation, so primitives and strings work out of the box. New
/// scalar types can be added without touching the decode engine.
#[derive(Default)]
pub struct ScalarRegistry {
    decoders: HashMap<TypeId, BoxedDecoder>,
}

impl ScalarRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Create a registry with the WXR default decoders installed.
    ///
    /// Installs the [`WpTime`] `pubDate` decoder and whitespace-trimming
    /// decoders for the integer types, so pretty-printed exports with
    /// padded numeric leaves (`<wp:term_id> 3 </wp:term_id>`) decode.
    /// String fields stay untrimmed.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(|raw: &str| raw.parse::<WpTime>().map_err(|e| e.to_string()));
        registry.register(|raw: &str| raw.trim().parse::<u32>().map_err(|e| e.to_string()));
        registry.register(|raw: &str| raw.trim().parse::<u64>().map_err(|e| e.to_string()));
        registry.register(|raw: &str| raw.trim().parse::<i32>().map_err(|e| e.to_string()));
        registry.register(|raw: &str| raw.trim().parse::<i64>().map_err(|e| e.to_string()));
        registry
    }

    /// Register a custom decoder for scalar type `T`.
    ///
    /// A registered decoder takes precedence over `FromStr` parsing.
    pub fn register<T, F>(&mut self, decode: F)
    where
        T: 'static,
        F: Fn(&str) -> Result<T, String> + Send + Sync + 'static,
    {
        self.decoders.insert(
            TypeId::of::<T>(),
            Box::new(move |raw| decode(raw).map(|value| Box::new(value) as Box<dyn Any>)),
        );
    }

    /// Check whether a custom decoder is registered for `T`.
    #[must_use]
    pub fn has_decoder<T: 'static>(&self) -> bool {
        self.decoders.contains_key(&TypeId::of::<T>())
    }

    /// Decode raw text into scalar type `T`.
    ///
    /// # Errors
    /// Returns the decoder's parse error message if the text does not
    /// satisfy the scalar's grammar.
    pub fn decode<T>(&self, raw: &str) -> Result<T, String>
    where
        T: FromStr + 'static,
        T::Err: fmt::Display,
    {
        match self.decoders.get(&TypeId::of::<T>()) {
            Some(decoder) => decoder(raw)?
                .downcast::<T>()
                .map(|boxed| *boxed)
                .map_err(|_| "registered decoder produced a mismatched type".to_string()),
            None => raw.parse::<T>().map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Debug for ScalarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarRegistry")
            .field("decoders", &self.decoders.len())
            .finish()
    }
}

/// Publication timestamp in the WordPress `pubDate` format.
///
/// The wire form is RFC 1123 with a numeric UTC offset, e.g.
/// `Mon, 03 Sep 2007 18:23:34 +0000`. The declared offset is preserved
/// rather than normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WpTime(pub DateTime<FixedOffset>);

impl WpTime {
    /// The instant with its declared offset.
    #[must_use]
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl FromStr for WpTime {
    type Err = chrono::ParseError;

    /// Parse the fixed-offset grammar only; named zones (`GMT`) and
    /// other RFC 2822 relaxations are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_str(s.trim(), "%a, %d %b %Y %H:%M:%S %z").map(WpTime)
    }
}

impl fmt::Display for WpTime {
    /// Stable rendering, e.g. `Mon, 03 Sep 2007 18:23:34 +0000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%a, %d %b %Y %H:%M:%S %z"))
    }
}
