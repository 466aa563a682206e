/// Read-mostly mirror of a backend collection with loading/error flags.
///
/// There is no cancellation for in-flight requests, so a response can
/// arrive after the view that asked for it is gone. Each `begin_load`
/// bumps a generation counter and hands out a token; resolving or
/// failing with a stale token is a no-op.
#[derive(Debug)]
pub struct RemoteCache<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoadToken(u64);

impl<T> Default for RemoteCache<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> RemoteCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadToken(self.generation)
    }

    pub fn resolve(&mut self, token: LoadToken, items: Vec<T>) {
        if token.0 != self.generation {
            return;
        }
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, token: LoadToken, message: impl Into<String>) {
        if token.0 != self.generation {
            return;
        }
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Drops cached items and invalidates every outstanding token.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.loading = false;
        self.error = None;
    }
}
