//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(any(feature = "std", feature = "alloc"))]
        message: String,
    },

    /// Invalid signature error
    InvalidSignature {
        context: &'static str,
        #[cfg(any(feature = "std", feature = "alloc"))]
        message: String,
    },

    /// Invalid hex encoding error (wrong length or non-hex character)
    InvalidEncoding {
        context: &'static str,
        #[cfg(any(feature = "std", feature = "alloc"))]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(any(feature = "std", feature = "alloc"))]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(any(feature = "std", feature = "alloc"))]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(any(feature = "std", feature = "alloc"))]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(any(feature = "std", feature = "alloc"))]
                message: String::new(),
            },
            Self::InvalidSignature { .. } => Self::InvalidSignature {
                context,
                #[cfg(any(feature = "std", feature = "alloc"))]
                message: String::new(),
            },
            Self::InvalidEncoding { .. } => Self::InvalidEncoding {
                context,
                #[cfg(any(feature = "std", feature = "alloc"))]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(any(feature = "std", feature = "alloc"))]
                message: String::new(),
            },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError {
                context,
                #[cfg(any(feature = "std", feature = "alloc"))]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(any(feature = "std", feature = "alloc"))]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when an allocator is available)
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidEncoding { context, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, .. } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InvalidSignature { context, .. } => {
                write!(f, "Invalid signature: {}", context)
            }
            #[cfg(any(feature = "std", feature = "alloc"))]
            Self::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding: {}: {}", context, message)
            }
            #[cfg(not(any(feature = "std", feature = "alloc")))]
            Self::InvalidEncoding { context } => {
                write!(f, "Invalid encoding: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(any(feature = "std", feature = "alloc"))]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(any(feature = "std", feature = "alloc")))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(any(feature = "std", feature = "alloc"))]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            #[cfg(not(any(feature = "std", feature = "alloc")))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            #[cfg(any(feature = "std", feature = "alloc"))]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(any(feature = "std", feature = "alloc")))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
