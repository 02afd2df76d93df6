// Common shape of every record held by a repository.
//
// An entity knows its own id and how to apply a set of optional field changes to itself.
// Repositories only ever compare ids with strict string equality.

pub trait Entity: Clone + Send + Sync + 'static {
    type Changes: Send + 'static;

    fn id(&self) -> &str;

    fn apply(&mut self, changes: Self::Changes);
}
