use indexmap::IndexMap;

/// A deferred resolution step that can be (re-)applied to a `Target` once the
/// entity named by the key it was registered under is available.
///
/// Implementations must perform their own lookup against `target` each time
/// they are invoked and must be idempotent: invoking the same resolution
/// twice against the same (or a more complete) target yields the same
/// result as invoking it once.
pub trait DeferredResolution {
    type Target;
    type Error;

    fn resolve(
        &self,
        name: &str,
        target: &mut Self::Target,
    ) -> Result<(), Self::Error>;
}

/// A registry of "resolve later" callbacks keyed by the name of the entity
/// they are waiting on.
///
/// The registry never looks anything up or caches anything itself; it only
/// remembers, per name, the ordered list of callbacks that were registered
/// against that name.
#[derive(Clone, Debug)]
pub struct DelayedResolver<TCallback> {
    pending: IndexMap<String, Vec<TCallback>>,
}
impl<TCallback> DelayedResolver<TCallback> {
    pub fn new() -> Self {
        Self {
            pending: IndexMap::new(),
        }
    }

    /// Register `callback` against `name`, after any callbacks previously
    /// registered against the same name.
    pub fn add(&mut self, name: impl AsRef<str>, callback: TCallback) {
        let name = name.as_ref();
        match self.pending.get_mut(name) {
            Some(callbacks) => callbacks.push(callback),
            None => {
                self.pending.insert(name.to_string(), vec![callback]);
            },
        }
    }

    /// The callbacks registered against `name` in registration order. A name
    /// that nothing was registered against yields an empty slice.
    pub fn get(&self, name: &str) -> &[TCallback] {
        self.pending.get(name)
            .map(|callbacks| callbacks.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Every name with at least one registered callback, in the order each
    /// name was first registered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pending.keys().map(|name| name.as_str())
    }

    /// Total number of registered callbacks across all names.
    pub fn num_callbacks(&self) -> usize {
        self.pending.values().map(|callbacks| callbacks.len()).sum()
    }
}
impl<TCallback: DeferredResolution> DelayedResolver<TCallback> {
    /// Invoke every callback registered against `name` against `target`, in
    /// registration order. The registered callbacks are left in place.
    ///
    /// Every callback is invoked even if an earlier one fails. Returns the
    /// number of callbacks invoked, or every error that was produced.
    pub fn resolve_all(
        &self,
        name: &str,
        target: &mut TCallback::Target,
    ) -> Result<usize, Vec<TCallback::Error>> {
        let callbacks = self.get(name);
        let errors: Vec<_> =
            callbacks.iter()
                .filter_map(|callback| callback.resolve(name, target).err())
                .collect();

        if errors.is_empty() {
            Ok(callbacks.len())
        } else {
            Err(errors)
        }
    }
}
impl<TCallback> Default for DelayedResolver<TCallback> {
    fn default() -> Self {
        Self::new()
    }
}
