use crate::{
    category::Holds,
    map::Map,
    source::Source,
};
use getset::CopyGetters;
use std::{
    any::TypeId,
    fmt::{self, Display},
    mem,
};

/// How the input is handed to an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// `&C`, elements are cloned.
    Borrowed,
    /// `C`, elements are moved.
    Owned,
    /// `[U; N]`, a literal list with no owning container.
    Literal,
}

/// Execution path of the map engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Borrowed input, same category, fresh output.
    CopyConvert,
    /// Borrowed input, caller chosen category, fresh output.
    CategoryConvert,
    /// Owned input, same category, fresh output.
    MoveConvert,
    /// Owned input, same category, input storage rewritten and returned.
    MoveInPlace,
    /// Owned input, caller chosen category, fresh output.
    MoveCategoryConvert,
    /// Literal list, fresh output.
    LiteralConvert,
}

impl Strategy {
    /// `reuses_storage` is only honored for owned inputs that keep their category.
    pub const fn select(binding: Binding, converts_category: bool, reuses_storage: bool) -> Self {
        match (binding, converts_category) {
            (Binding::Literal, _) => Strategy::LiteralConvert,
            (Binding::Borrowed, false) => Strategy::CopyConvert,
            (Binding::Borrowed, true) => Strategy::CategoryConvert,
            (Binding::Owned, true) => Strategy::MoveCategoryConvert,
            (Binding::Owned, false) if reuses_storage => Strategy::MoveInPlace,
            (Binding::Owned, false) => Strategy::MoveConvert,
        }
    }

    /// True if output is built into a new allocation.
    pub const fn allocates(self) -> bool {
        !matches!(self, Strategy::MoveInPlace)
    }
}

/// Slot of `U` can hold a `V`.
///
/// Holds whenever `U == V`, which is what the in-place path is for,
/// but also for layout twins such as `u32` and `f32`.
pub const fn reuses_storage<U, V>() -> bool {
    mem::size_of::<U>() == mem::size_of::<V>() && mem::align_of::<U>() == mem::align_of::<V>()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct TypeInfo {
    name: &'static str,
    size: usize,
    align: usize,
}

impl TypeInfo {
    pub fn of<T>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            size: mem::size_of::<T>(),
            align: mem::align_of::<T>(),
        }
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Dispatch decision of a map call, computed without running it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Plan {
    strategy: Strategy,
    input: TypeInfo,
    output: TypeInfo,
}

impl Plan {
    /// Plan of `map(f, input)` where `f` produces `V`.
    pub fn map<I: Map<V>, V>() -> Self {
        Self {
            strategy: I::STRATEGY,
            input: TypeInfo::of::<I>(),
            output: TypeInfo::of::<I::Output>(),
        }
    }

    /// Plan of `map_to::<O>(f, input)` where `f` produces `V`.
    pub fn map_to<O: Holds<V>, I: Source, V>() -> Self {
        let converts = TypeId::of::<O>() != TypeId::of::<I::Category>();
        Self {
            strategy: Strategy::select(I::BINDING, converts, false),
            input: TypeInfo::of::<I>(),
            output: TypeInfo::of::<O::Output>(),
        }
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {} -> {}", self.strategy, self.input, self.output)
    }
}
