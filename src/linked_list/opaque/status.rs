/// Result codes returned by the opaque list operations.
///
/// The set is closed: every status-returning operation answers with one of
/// these variants and callers can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The operation mutated the list as requested.
    Ok,
    /// The handle was null; the list was not touched.
    Null,
    /// The list exists but holds no nodes.
    Empty,
    /// The item reference is present in the list.
    Found,
    /// No node holds the given item reference.
    NotFound,
    /// Node allocation failed; the list is unchanged.
    AllocError,
}
