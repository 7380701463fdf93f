// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible hosting operations return `error::Result<T>`.  Disposal paths
// never return errors; their native failures are logged and swallowed so the
// remaining cleanup steps still run.

/// Every error the hosting layer can produce.
#[derive(Debug)]
pub enum HostError {
    /// A native windowing call returned a failure code.
    Native {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw platform error code (`GetLastError()` value or HRESULT).
        code: u32,
    },

    /// A handle of the wrong kind was handed to a host.  Raised before any
    /// native call is made.
    IncompatibleHandle {
        /// The descriptor carried by the offending handle.
        descriptor: String,
    },

    /// An attachment was asked to move to a host of a different platform kind.
    IncompatibleHost {
        expected: crate::platform::HostKind,
        found: crate::platform::HostKind,
    },

    /// The attachment is detached and the operation needs a top-level.
    NotAttached,

    /// The object has already been disposed.
    Disposed,

    /// The caller-supplied child factory failed.
    Factory(Box<dyn std::error::Error + Send + Sync>),

    /// The hosting configuration could not be parsed.
    Config(serde_json::Error),

    /// A standard I/O error (reading a config file).
    Io(std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HostError>;

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
            Self::IncompatibleHandle { descriptor } => {
                write!(f, "{descriptor} is not compatible with this host")
            }
            Self::IncompatibleHost { expected, found } => {
                write!(f, "attachment for {expected:?} cannot move to a {found:?} host")
            }
            Self::NotAttached => write!(f, "the control isn't currently attached to a toplevel"),
            Self::Disposed => write!(f, "object has already been disposed"),
            Self::Factory(e) => write!(f, "native child factory failed: {e}"),
            Self::Config(e) => write!(f, "invalid host configuration: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Factory(e) => Some(e.as_ref()),
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for HostError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

// Convert a windows-crate error (HRESULT) directly into a HostError so that
// `?` can be used on `windows::core::Result<T>` throughout the Win32 backend.
#[cfg(windows)]
impl From<windows::core::Error> for HostError {
    fn from(e: windows::core::Error) -> Self {
        Self::Native {
            function: "Win32",
            // HRESULT is an i32; reinterpret as u32 for display purposes.
            code: e.code().0 as u32,
        }
    }
}
