use std::fmt::Debug;
use std::hash::Hash;

/// Identifier type shared by all clinic records.
pub type Id = u64;

/// An identifier type a store can generate on its own.
///
/// `first` is the value handed out by an empty store and `next` the
/// successor of a previously observed value.
pub trait IdSequence: Copy + Eq + Ord + Hash + Debug {
    fn first() -> Self;
    fn next(self) -> Self;
}

macro_rules! impl_id_sequence {
    ($($t:ty),*) => {
        $(
            impl IdSequence for $t {
                fn first() -> Self { 1 }
                fn next(self) -> Self { self.saturating_add(1) }
            }
        )*
    };
}

impl_id_sequence!(u8, u16, u32, u64, i64);

/// A record addressable by identifier.
pub trait Entity: Clone + PartialEq {
    type Id: IdSequence;

    fn id(&self) -> Option<Self::Id>;
    fn set_id(&mut self, id: Self::Id);

    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}

/// Implements [`Entity`] for records with an `id: Option<Id>` field.
#[macro_export]
macro_rules! impl_entity {
    ($($t:ty),*) => {
        $(
            impl $crate::base::Entity for $t {
                type Id = $crate::base::Id;

                fn id(&self) -> Option<Self::Id> { self.id }
                fn set_id(&mut self, id: Self::Id) { self.id = Some(id); }
            }
        )*
    };
}
