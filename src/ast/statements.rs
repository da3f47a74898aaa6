/// A single argument inside `operation( ... )`.
///
/// An argument without a key is positional.
///
/// # Examples
/// ```text
/// modules              // positional
/// module=pricing       // keyed, bareword value
/// input="data.json"    // keyed, string value
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub key: Option<String>,
    pub value: String,
}

impl Argument {
    pub fn positional(value: impl Into<String>) -> Self {
        Argument {
            key: None,
            value: value.into(),
        }
    }

    pub fn keyed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Argument {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    pub fn is_positional(&self) -> bool {
        self.key.is_none()
    }
}

/// One parsed `operation(args) { fields }` unit.
///
/// Arguments and fields keep their source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Operation name, always a bare identifier
    pub operation: String,

    /// Arguments in source order
    pub args: Vec<Argument>,

    /// Field tokens from the `{ ... }` block, empty when absent
    pub fields: Vec<String>,
}

impl Statement {
    pub fn new(operation: impl Into<String>) -> Self {
        Statement {
            operation: operation.into(),
            args: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// The first positional argument, if any.
    pub fn first_positional(&self) -> Option<&str> {
        self.args
            .iter()
            .find(|arg| arg.is_positional())
            .map(|arg| arg.value.as_str())
    }

    /// Value of the last argument carrying `key`.
    ///
    /// Later occurrences override earlier ones.
    pub fn named(&self, key: &str) -> Option<&str> {
        self.args
            .iter()
            .rev()
            .find(|arg| arg.key.as_deref() == Some(key))
            .map(|arg| arg.value.as_str())
    }

    /// Field tokens requested for projection.
    ///
    /// This is the `{ ... }` block followed by any positional argument after
    /// the first one whose value is a preset name, so `calc(pricing.bvr,
    /// minimal)` projects like `calc(pricing.bvr) { minimal }`.
    pub fn requested_fields(&self) -> Vec<String> {
        let mut requested = self.fields.clone();
        let first = self.args.iter().position(Argument::is_positional);
        for (idx, arg) in self.args.iter().enumerate() {
            if arg.is_positional()
                && Some(idx) != first
                && crate::fields::is_preset(&arg.value)
            {
                requested.push(arg.value.clone());
            }
        }
        requested
    }
}
