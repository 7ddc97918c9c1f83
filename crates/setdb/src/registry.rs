use std::{
    any::{Any, TypeId, type_name},
    collections::{HashMap, hash_map::Entry},
    sync::LazyLock,
};

use log::debug;
use parking_lot::RwLock;

use crate::{
    Category, Error, Persist, Result, SIZE_OF_U64, SetLike, Sink, Source, category_of, load_set,
    save_set,
};

/// Static binding: every set-like container whose items persist is itself
/// persistent, through [`save_set`] and [`load_set`].
///
/// This is the only `Persist` binding for set-like types, so a container can
/// never be claimed by two protocols.
impl<S> Persist for S
where
    S: SetLike,
    S::Item: Persist + Default,
{
    const MIN_ENCODED_LEN: usize = SIZE_OF_U64;

    #[inline]
    fn save<W: Sink + ?Sized>(&self, sink: &mut W) -> Result<()> {
        save_set(sink, self)?;
        Ok(())
    }

    #[inline]
    fn load<R: Source + ?Sized>(&mut self, source: &mut R) -> Result<()> {
        load_set(source, self)?;
        Ok(())
    }
}

type SaveFn = fn(&dyn Any, &mut dyn Sink) -> Result<()>;
type LoadFn = fn(&mut dyn Any, &mut dyn Source) -> Result<()>;

/// Type-erased save/load pair for one registered container type.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    type_name: &'static str,
    category: Category,
    save: SaveFn,
    load: LoadFn,
}

impl Binding {
    pub fn of<S>() -> Self
    where
        S: SetLike + Any,
        S::Item: Persist + Default,
    {
        Self {
            type_name: type_name::<S>(),
            category: category_of::<S>(),
            save: save_erased::<S>,
            load: load_erased::<S>,
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn save(&self, value: &dyn Any, sink: &mut dyn Sink) -> Result<()> {
        (self.save)(value, sink)
    }

    #[inline]
    pub fn load(&self, value: &mut dyn Any, source: &mut dyn Source) -> Result<()> {
        (self.load)(value, source)
    }
}

fn save_erased<S>(value: &dyn Any, sink: &mut dyn Sink) -> Result<()>
where
    S: SetLike + Any,
    S::Item: Persist + Default,
{
    let set = value.downcast_ref::<S>().ok_or(Error::TypeMismatch {
        expected: type_name::<S>(),
    })?;
    save_set(sink, set)?;
    Ok(())
}

fn load_erased<S>(value: &mut dyn Any, source: &mut dyn Source) -> Result<()>
where
    S: SetLike + Any,
    S::Item: Persist + Default,
{
    let set = value.downcast_mut::<S>().ok_or(Error::TypeMismatch {
        expected: type_name::<S>(),
    })?;
    load_set(source, set)?;
    Ok(())
}

static GLOBAL: LazyLock<RwLock<Registry>> = LazyLock::new(Default::default);

/// Lookup table from type identity to the [`Binding`] serving it.
///
/// Filled by explicit [`Registry::register`] calls; nothing registers itself.
/// Used where the concrete container type is only known at runtime, statically
/// typed code can call [`Persist`] directly.
#[derive(Debug, Default)]
pub struct Registry {
    bindings: HashMap<TypeId, Binding>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry, for initialization-time registration.
    pub fn global() -> &'static RwLock<Registry> {
        &GLOBAL
    }

    /// Binds `S`, returns `false` if it was already bound.
    ///
    /// The first binding is kept so dispatch for a type never changes once
    /// set up.
    pub fn register<S>(&mut self) -> bool
    where
        S: SetLike + Any,
        S::Item: Persist + Default,
    {
        match self.bindings.entry(TypeId::of::<S>()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let binding = Binding::of::<S>();
                debug!("registered {} as {}", binding.type_name, binding.category);
                entry.insert(binding);
                true
            }
        }
    }

    /// Builder form of [`Registry::register`].
    pub fn with<S>(mut self) -> Self
    where
        S: SetLike + Any,
        S::Item: Persist + Default,
    {
        self.register::<S>();
        self
    }

    #[inline]
    pub fn is_registered<T: Any + ?Sized>(&self) -> bool {
        self.bindings.contains_key(&TypeId::of::<T>())
    }

    #[inline]
    pub fn binding(&self, type_id: TypeId) -> Option<&Binding> {
        self.bindings.get(&type_id)
    }

    #[inline]
    pub fn category(&self, type_id: TypeId) -> Option<Category> {
        self.binding(type_id).map(Binding::category)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Saves `value` with the binding registered for its concrete type.
    pub fn save(&self, sink: &mut dyn Sink, value: &dyn Any) -> Result<()> {
        self.lookup((*value).type_id())?.save(value, sink)
    }

    /// Loads into `value` with the binding registered for its concrete type.
    pub fn load(&self, source: &mut dyn Source, value: &mut dyn Any) -> Result<()> {
        self.lookup((*value).type_id())?.load(value, source)
    }

    fn lookup(&self, type_id: TypeId) -> Result<&Binding> {
        self.binding(type_id).ok_or(Error::NotRegistered(type_id))
    }
}
