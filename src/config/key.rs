//! The fixed set of recognized configuration properties
//!
//! Both the command-line override scan and the properties-file validator
//! consult this table. Lookups are exact-match and case-sensitive.

/// A canonical configuration property.
///
/// Each property has a command-line flag spelling (`-testsuite`) and a
/// canonical name (`testsuite`) used as the key in the properties file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// Name of the test suite to run on the server
    Testsuite,
    /// Destination file for the test reports
    Reports,
    /// Base URL of the server hosting the test-execution service
    Url,
    /// Timeout forwarded opaquely to the server; never enforced locally
    Timeout,
    /// Path of the properties file (consumed during file-path resolution)
    Prop,
    /// Username for the service invocation
    Username,
    /// Password for the service invocation
    Password,
}

impl PropertyKey {
    /// All recognized properties, in flag-table order.
    pub const ALL: [PropertyKey; 7] = [
        PropertyKey::Testsuite,
        PropertyKey::Reports,
        PropertyKey::Url,
        PropertyKey::Timeout,
        PropertyKey::Prop,
        PropertyKey::Username,
        PropertyKey::Password,
    ];

    /// The command-line flag that selects this property.
    pub fn flag(&self) -> &'static str {
        match self {
            PropertyKey::Testsuite => "-testsuite",
            PropertyKey::Reports => "-reports",
            PropertyKey::Url => "-url",
            PropertyKey::Timeout => "-timeout",
            PropertyKey::Prop => "-prop",
            PropertyKey::Username => "-username",
            PropertyKey::Password => "-password",
        }
    }

    /// The canonical name used as a properties-file key.
    pub fn name(&self) -> &'static str {
        // The flag is always the name with a leading dash.
        &self.flag()[1..]
    }

    /// Look up a property by its command-line flag.
    pub fn from_flag(flag: &str) -> Option<PropertyKey> {
        Self::ALL.iter().copied().find(|k| k.flag() == flag)
    }

    /// Look up a property by its canonical name.
    pub fn from_name(name: &str) -> Option<PropertyKey> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}
