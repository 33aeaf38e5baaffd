//! Sync/async normalization.
//!
//! [`AsyncFn`] wraps either a plain function or a future-returning function
//! behind one calling convention: `call(args).await` always yields the
//! function's result. Wrapped functions take a single argument; use `()` for
//! none and a tuple for several.

use std::any::type_name;
use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;

use tokio::task::JoinHandle;

/// A boxed, sendable future.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// A result that is either available now or still has to be awaited.
pub enum MaybeAsync<T> {
    /// The value is already computed.
    Ready(T),
    /// The value is produced by a future.
    Pending(BoxFuture<T>),
}

impl<T> MaybeAsync<T> {
    /// Wrap an already computed value.
    pub const fn ready(value: T) -> Self {
        Self::Ready(value)
    }

    /// Wrap a future.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::Pending(Box::pin(future))
    }

    /// Whether the value is available without awaiting.
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl<T: Send + 'static> IntoFuture for MaybeAsync<T> {
    type Output = T;
    type IntoFuture = BoxFuture<T>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(value) => Box::pin(std::future::ready(value)),
            Self::Pending(future) => future,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MaybeAsync<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

type DynFn<A, T> = dyn Fn(A) -> MaybeAsync<T> + Send + Sync;

/// A function normalized to an asynchronous calling convention.
pub struct AsyncFn<A, T> {
    name: &'static str,
    func: Arc<DynFn<A, T>>,
}

impl<A, T> AsyncFn<A, T>
where
    A: 'static,
    T: Send + 'static,
{
    /// Wrap a plain function. Calls still run synchronously; only the result
    /// is delivered through a future.
    pub fn from_sync<F>(func: F) -> Self
    where
        F: Fn(A) -> T + Send + Sync + 'static,
    {
        Self {
            name: type_name::<F>(),
            func: Arc::new(move |args: A| MaybeAsync::Ready(func(args))),
        }
    }

    /// Wrap a future-returning function.
    pub fn from_async<F, Fut>(func: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self {
            name: type_name::<F>(),
            func: Arc::new(move |args: A| MaybeAsync::pending(func(args))),
        }
    }

    /// Type name of the wrapped function.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the function without awaiting its result.
    pub fn invoke(&self, args: A) -> MaybeAsync<T> {
        (self.func)(args)
    }

    /// Invoke the function and await its result.
    pub async fn call(&self, args: A) -> T {
        tracing::trace!(function = self.name, "Calling wrapped function");
        self.invoke(args).await
    }

    /// Run the call as a task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn spawn(&self, args: A) -> JoinHandle<T>
    where
        A: Send,
    {
        let func = Arc::clone(&self.func);
        tracing::debug!(function = self.name, "Spawning wrapped function");
        tokio::spawn(async move { func(args).await })
    }
}

impl<A, T> Clone for AsyncFn<A, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            func: Arc::clone(&self.func),
        }
    }
}

impl<A, T> fmt::Debug for AsyncFn<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFn").field("name", &self.name).finish()
    }
}

/// Ensures that the given function is asynchronous.
///
/// The function may hand back its result directly ([`MaybeAsync::Ready`]) or
/// as a future ([`MaybeAsync::Pending`]); awaiting the wrapper's `call` yields
/// the result either way. Plain and future-returning functions can also be
/// wrapped directly with [`AsyncFn::from_sync`] and [`AsyncFn::from_async`].
pub fn ensure_async<A, T, F>(func: F) -> AsyncFn<A, T>
where
    A: 'static,
    T: Send + 'static,
    F: Fn(A) -> MaybeAsync<T> + Send + Sync + 'static,
{
    AsyncFn {
        name: type_name::<F>(),
        func: Arc::new(func),
    }
}
