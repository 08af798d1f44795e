//! Route computation across the C boundary and the lifetime of its results

use std::ffi::c_int;
use std::ptr;
use std::sync::{LazyLock, Mutex, PoisonError};

use hashbrown::HashSet;
use log::{debug, warn};
use rotas_core::prelude::*;

use crate::buffer::write_i32;
use crate::guard::guarded;
use crate::model::network;

/// Route handed to the caller, who must release it with [`liberar_resultado`].
///
/// Layout: `{ int32* ids; int32 num_ids; int32 distance_total; }`
#[repr(C)]
#[derive(Debug)]
pub struct RouteResult {
    /// `num_ids` vertex ids, origin first
    pub ids: *mut c_int,
    pub num_ids: c_int,
    /// Meters
    pub distance_total: c_int,
}

/// Outcome written by [`calcular_rota_status`]
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    Ok = 0,
    InvalidInput = 1,
    Unreachable = 2,
    Internal = 3,
}

/// Addresses of results handed out and not yet released.
///
/// Catches a repeated release only while the freed address has not been
/// handed out again by a later route.
static LIVE_RESULTS: LazyLock<Mutex<HashSet<usize>>> = LazyLock::new(Default::default);

fn live_results() -> std::sync::MutexGuard<'static, HashSet<usize>> {
    LIVE_RESULTS.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RouteResult {
    /// Moves a route onto the heap and registers the handle
    fn into_handle(route: Route) -> Result<*mut RouteResult, RouteStatus> {
        let distance_total = c_int::try_from(route.distance()).map_err(|_| {
            warn!("Route distance {} does not fit in int32", route.distance());
            RouteStatus::Internal
        })?;
        let ids = route
            .into_vertices()
            .into_iter()
            .map(c_int::try_from)
            .collect::<Result<Box<[c_int]>, _>>()
            .map_err(|_| RouteStatus::Internal)?;
        let num_ids = c_int::try_from(ids.len()).map_err(|_| RouteStatus::Internal)?;

        let handle = Box::into_raw(Box::new(RouteResult {
            ids: Box::into_raw(ids).cast::<c_int>(),
            num_ids,
            distance_total,
        }));
        live_results().insert(handle as usize);
        Ok(handle)
    }

    /// Frees a registered handle; unknown handles are ignored, as are released
    /// ones whose address has not been reused.
    ///
    /// # Safety
    ///
    /// `handle` must be null or a value returned by [`RouteResult::into_handle`].
    unsafe fn release(handle: *mut RouteResult) -> bool {
        if handle.is_null() {
            return false;
        }
        if !live_results().remove(&(handle as usize)) {
            warn!("Ignoring release of unknown or already released route result {handle:p}");
            return false;
        }

        // SAFETY: registered handles come from Box::into_raw and are released once
        let result = unsafe { Box::from_raw(handle) };
        if !result.ids.is_null() {
            let len = usize::try_from(result.num_ids).unwrap_or(0);
            // SAFETY: `ids` came from a boxed slice of exactly `num_ids` elements
            drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(result.ids, len)) });
        }
        true
    }

    /// Ids as a slice, for Rust callers holding a live handle
    ///
    /// # Safety
    ///
    /// `self` must be a live result obtained from this crate.
    pub unsafe fn ids(&self) -> &[c_int] {
        if self.ids.is_null() {
            return &[];
        }
        let len = usize::try_from(self.num_ids).unwrap_or(0);
        // SAFETY: live results own `num_ids` ids
        unsafe { std::slice::from_raw_parts(self.ids, len) }
    }
}

fn route_handle(origin: c_int, destination: c_int) -> Result<*mut RouteResult, RouteStatus> {
    let network = network().ok_or(RouteStatus::Internal)?;

    let (Ok(origin), Ok(destination)) = (VertexId::try_from(origin), VertexId::try_from(destination))
    else {
        debug!("Rejecting route request with negative vertex id");
        return Err(RouteStatus::InvalidInput);
    };

    let route = compute_route(network, origin, destination).map_err(|e| {
        debug!("Route request failed: {e}");
        if e.is_invalid_input() {
            RouteStatus::InvalidInput
        } else {
            RouteStatus::Unreachable
        }
    })?;

    RouteResult::into_handle(route)
}

/// Computes the shortest route between two vertex ids.
///
/// Returns null for equal endpoints, unknown ids and unreachable destinations
/// alike; use [`calcular_rota_status`] to tell them apart. Every non-null
/// result must be passed to [`liberar_resultado`] exactly once.
#[unsafe(no_mangle)]
pub extern "C" fn calcular_rota(origin: c_int, destination: c_int) -> *mut RouteResult {
    guarded("calcular_rota", ptr::null_mut(), || {
        route_handle(origin, destination).unwrap_or(ptr::null_mut())
    })
}

/// Like [`calcular_rota`], additionally writing a [`RouteStatus`] code to
/// `status_out` when it is non-null.
///
/// # Safety
///
/// `status_out` must be null or valid for a write of one `int32`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn calcular_rota_status(
    origin: c_int,
    destination: c_int,
    status_out: *mut c_int,
) -> *mut RouteResult {
    let (handle, status) = guarded(
        "calcular_rota_status",
        (ptr::null_mut(), RouteStatus::Internal),
        || match route_handle(origin, destination) {
            Ok(handle) => (handle, RouteStatus::Ok),
            Err(status) => (ptr::null_mut(), status),
        },
    );
    // SAFETY: forwarded caller contract
    unsafe { write_i32(status_out, status as c_int) };
    handle
}

/// Releases a result returned by [`calcular_rota`] or [`calcular_rota_status`].
///
/// Null is a no-op. A pointer that never came from this library, or one that
/// was already released and whose address has not been reused by a later
/// result, is ignored and logged. Once a later route reuses the address, a
/// stale second release frees that route instead, so each result must still
/// be released exactly once.
///
/// # Safety
///
/// `handle` must be null or a pointer obtained from this library. The result
/// must not be read after release.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn liberar_resultado(handle: *mut RouteResult) {
    guarded("liberar_resultado", (), || {
        // SAFETY: forwarded caller contract; the registry rejects stale handles
        unsafe { RouteResult::release(handle) };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serializes tests that allocate results, so a freed address is not
    /// reused between two releases
    static ROUTES: Mutex<()> = Mutex::new(());

    #[test]
    fn handle_round_trip_frees_once() {
        let _routes = ROUTES.lock().unwrap_or_else(PoisonError::into_inner);
        let handle = calcular_rota(22, 28);
        assert!(!handle.is_null());

        assert!(unsafe { RouteResult::release(handle) });
        assert!(!unsafe { RouteResult::release(handle) });
        assert!(!unsafe { RouteResult::release(ptr::null_mut()) });
    }

    #[test]
    fn status_distinguishes_failures() {
        let _routes = ROUTES.lock().unwrap_or_else(PoisonError::into_inner);
        let mut status = -1;

        let handle = unsafe { calcular_rota_status(22, 22, &mut status) };
        assert!(handle.is_null());
        assert_eq!(status, RouteStatus::InvalidInput as c_int);

        let handle = unsafe { calcular_rota_status(-4, 22, &mut status) };
        assert!(handle.is_null());
        assert_eq!(status, RouteStatus::InvalidInput as c_int);

        let handle = unsafe { calcular_rota_status(67, 0, &mut status) };
        assert!(handle.is_null());
        assert_eq!(status, RouteStatus::Unreachable as c_int);

        let handle = unsafe { calcular_rota_status(22, 114, &mut status) };
        assert!(!handle.is_null());
        assert_eq!(status, RouteStatus::Ok as c_int);
        unsafe { liberar_resultado(handle) };

        let handle = unsafe { calcular_rota_status(22, 114, ptr::null_mut()) };
        assert!(!handle.is_null());
        unsafe { liberar_resultado(handle) };
    }
}
