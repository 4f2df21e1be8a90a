/// Classification for failover policy.
///
/// Used by the registry to decide whether a failed provider should hand the
/// request over to the next one.
///
/// | Class | Try Next Provider? |
/// |-------|-------------------|
/// | `Never` | No |
/// | `NextProvider` | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Terminal failure. Asking another provider won't help.
    Never,

    /// This provider couldn't answer; another one might.
    NextProvider,
}
