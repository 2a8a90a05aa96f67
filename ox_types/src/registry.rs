use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lazy_static::lazy_static;
use log::{debug, trace, warn};

use crate::error::TypeError;
use crate::spec::TypeSpec;
use crate::types::Type;

/// Builds a configured type from the spec it was requested with.
pub type TypeFactory = Arc<dyn Fn(&TypeSpec) -> Result<Arc<dyn Type>, TypeError> + Send + Sync>;

/// What a registry name resolves to.
#[derive(Clone)]
pub enum TypeEntry {
    /// A ready-made type, handed out as is.
    Instance(Arc<dyn Type>),
    /// A parameterized family, built afresh for every lookup.
    Factory { name: String, build: TypeFactory },
}

impl TypeEntry {
    /// The name this entry is registered under
    pub fn name(&self) -> &str {
        match self {
            TypeEntry::Instance(ty) => ty.name(),
            TypeEntry::Factory { name, .. } => name,
        }
    }
}

impl fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeEntry::Instance(ty) => f.debug_tuple("Instance").field(&ty.name()).finish(),
            TypeEntry::Factory { name, .. } => f.debug_tuple("Factory").field(name).finish(),
        }
    }
}

/// Lookup table from type name to type or type factory.
///
/// Holds at most one entry per name. Registering a name again replaces the
/// previous entry.
#[derive(Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeEntry>,
}

lazy_static! {
    /// The process-wide type registry. Type modules populate it at startup
    /// and it is mostly read afterwards.
    pub static ref TYPE_REGISTRY: RwLock<TypeRegistry> = RwLock::new(TypeRegistry::new());
}

impl TypeRegistry {
    /// Create a new empty type registry
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Add an entry under its own name, replacing any existing one.
    pub fn register(&mut self, entry: TypeEntry) {
        let name = entry.name().to_string();
        match self.types.insert(name.clone(), entry) {
            Some(previous) => debug!("Replaced type '{}' (was {:?})", name, previous),
            None => debug!("Registered type '{}'", name),
        }
    }

    /// Register a type instance under its own name
    pub fn register_type(&mut self, ty: Arc<dyn Type>) {
        self.register(TypeEntry::Instance(ty));
    }

    /// Register a factory that builds types named `name` from their spec
    pub fn register_factory<F>(&mut self, name: &str, build: F)
    where
        F: Fn(&TypeSpec) -> Result<Arc<dyn Type>, TypeError> + Send + Sync + 'static,
    {
        self.register(TypeEntry::Factory {
            name: name.to_string(),
            build: Arc::new(build),
        });
    }

    /// Remove the entry for `name`. Unknown names are ignored.
    pub fn deregister_type(&mut self, name: &str) {
        if self.types.remove(name).is_some() {
            debug!("Deregistered type '{}'", name);
        }
    }

    /// Get the raw entry stored for `name`
    pub fn entry(&self, name: &str) -> Option<&TypeEntry> {
        self.types.get(name)
    }

    /// Resolve a type reference.
    ///
    /// Instances are returned unchanged and ignore any parameters in the
    /// spec. Factories are called with the full spec. An unknown name gives
    /// `Ok(None)`; an object spec without a `name` is an error.
    pub fn get_type(&self, spec: &TypeSpec) -> Result<Option<Arc<dyn Type>>, TypeError> {
        let name = spec.name()?;
        match self.types.get(name) {
            Some(entry) => instantiate(entry, spec).map(Some),
            None => {
                trace!("No type registered as '{}'", name);
                Ok(None)
            }
        }
    }

    /// Check if anything is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Names of all registered types, sorted
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if no types are registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn instantiate(entry: &TypeEntry, spec: &TypeSpec) -> Result<Arc<dyn Type>, TypeError> {
    match entry {
        TypeEntry::Instance(ty) => Ok(Arc::clone(ty)),
        TypeEntry::Factory { name, build } => {
            trace!("Building type '{}' from {:?}", name, spec);
            build(spec)
        }
    }
}

fn read_registry() -> RwLockReadGuard<'static, TypeRegistry> {
    TYPE_REGISTRY.read().unwrap_or_else(|poisoned| {
        warn!("Type registry lock was poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}

fn write_registry() -> RwLockWriteGuard<'static, TypeRegistry> {
    TYPE_REGISTRY.write().unwrap_or_else(|poisoned| {
        warn!("Type registry lock was poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}

/// Add a type to the process-wide registry.
pub fn register_type(ty: Arc<dyn Type>) {
    write_registry().register_type(ty);
}

/// Add a type factory to the process-wide registry.
pub fn register_factory<F>(name: &str, build: F)
where
    F: Fn(&TypeSpec) -> Result<Arc<dyn Type>, TypeError> + Send + Sync + 'static,
{
    write_registry().register_factory(name, build);
}

/// Remove a type from the process-wide registry.
pub fn deregister_type(name: &str) {
    write_registry().deregister_type(name);
}

/// Resolve a type reference against the process-wide registry.
///
/// The entry is copied out before a factory runs, so factories may resolve
/// other types themselves.
pub fn get_type<S: Into<TypeSpec>>(spec: S) -> Result<Option<Arc<dyn Type>>, TypeError> {
    let spec = spec.into();
    let name = spec.name()?;
    let entry = read_registry().entry(name).cloned();
    match entry {
        Some(entry) => instantiate(&entry, &spec).map(Some),
        None => {
            trace!("No type registered as '{}'", name);
            Ok(None)
        }
    }
}
