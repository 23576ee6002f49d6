/// Basic repository operations over one record type.
///
/// Absence is never an error: lookups return `None` and deletes of unknown
/// records are no-ops.
pub trait CrudService<T, ID> {
    fn find_all(&self) -> Vec<T>;
    fn find_by_id(&self, id: ID) -> Option<T>;
    /// Upsert keyed by the record's own identifier; a missing one is generated.
    fn save(&mut self, object: T) -> T;
    /// Remove every stored record equal to `object`.
    fn delete(&mut self, object: &T);
    fn delete_by_id(&mut self, id: ID);
}
