//! Vertex and point-of-interest lookups for the front-end pick-lists
//!
//! Integer results follow one convention: `0` on success, `-1` when the id or
//! index is unknown (outputs untouched). Strings are written NUL-terminated
//! and silently truncated to the caller's capacity.

use std::ffi::{c_char, c_int};

use rotas_core::prelude::*;

use crate::buffer::{write_c_string, write_i32};
use crate::guard::guarded;
use crate::model::network;

pub const SUCCESS: c_int = 0;
pub const NOT_FOUND: c_int = -1;
/// Returned by [`obter_rua_vertice`] for a vertex without a recorded street
pub const STREET_ABSENT: c_int = 1;

fn count_to_c(count: usize) -> c_int {
    c_int::try_from(count).unwrap_or(c_int::MAX)
}

/// Number of points of interest, `0` if the network failed to load
#[unsafe(no_mangle)]
pub extern "C" fn get_num_pontos() -> c_int {
    guarded("get_num_pontos", 0, || {
        network().map_or(0, |network| count_to_c(network.point_count()))
    })
}

/// Point of interest at position `index` of the pick-list.
///
/// # Safety
///
/// Each non-null buffer must be writable for its stated length; each non-null
/// integer pointer must be writable.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn get_ponto_info(
    index: c_int,
    name_out: *mut c_char,
    name_len: c_int,
    category_out: *mut c_char,
    category_len: c_int,
    id_out: *mut c_int,
    x_out: *mut c_int,
    y_out: *mut c_int,
) -> c_int {
    guarded("get_ponto_info", NOT_FOUND, || {
        let Some(network) = network() else {
            return NOT_FOUND;
        };
        let Ok(index) = usize::try_from(index) else {
            return NOT_FOUND;
        };
        let Ok(point) = network.point_info(index) else {
            return NOT_FOUND;
        };
        let Ok(id) = c_int::try_from(point.id) else {
            return NOT_FOUND;
        };

        // SAFETY: forwarded caller contract
        unsafe {
            write_c_string(name_out, name_len, point.name);
            write_c_string(category_out, category_len, point.category);
            write_i32(id_out, id);
            write_i32(x_out, point.x);
            write_i32(y_out, point.y);
        }
        SUCCESS
    })
}

/// Number of vertices in the street graph, `0` if the network failed to load
#[unsafe(no_mangle)]
pub extern "C" fn obter_numero_total_vertices() -> c_int {
    guarded("obter_numero_total_vertices", 0, || {
        network().map_or(0, |network| count_to_c(network.vertex_count()))
    })
}

/// Name, category and coordinates of vertex `id`.
///
/// A null buffer with zero length skips that field.
///
/// # Safety
///
/// Each non-null buffer must be writable for its stated length; each non-null
/// integer pointer must be writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn obter_info_vertice(
    id: c_int,
    name_out: *mut c_char,
    name_len: c_int,
    category_out: *mut c_char,
    category_len: c_int,
    x_out: *mut c_int,
    y_out: *mut c_int,
) -> c_int {
    guarded("obter_info_vertice", NOT_FOUND, || {
        let Some(info) = network()
            .zip(VertexId::try_from(id).ok())
            .and_then(|(network, id)| network.vertex_info(id).ok())
        else {
            return NOT_FOUND;
        };

        // SAFETY: forwarded caller contract
        unsafe {
            write_c_string(name_out, name_len, info.name);
            write_c_string(category_out, category_len, info.category);
            write_i32(x_out, info.x);
            write_i32(y_out, info.y);
        }
        SUCCESS
    })
}

/// Street of vertex `id`.
///
/// Returns [`STREET_ABSENT`] (and writes an empty string) when the dataset
/// records no street, including the `N/A` placeholder.
///
/// # Safety
///
/// A non-null `out` must be writable for `out_len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn obter_rua_vertice(id: c_int, out: *mut c_char, out_len: c_int) -> c_int {
    guarded("obter_rua_vertice", NOT_FOUND, || {
        let Some(street) = network()
            .zip(VertexId::try_from(id).ok())
            .and_then(|(network, id)| network.street_of(id).ok())
        else {
            return NOT_FOUND;
        };

        // SAFETY: forwarded caller contract
        unsafe { write_c_string(out, out_len, street.unwrap_or_default()) };
        if street.is_some() {
            SUCCESS
        } else {
            STREET_ABSENT
        }
    })
}

/// Vertex closest to map point `(x, y)`.
///
/// # Safety
///
/// A non-null `id_out` must be writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn obter_vertice_mais_proximo(x: c_int, y: c_int, id_out: *mut c_int) -> c_int {
    guarded("obter_vertice_mais_proximo", NOT_FOUND, || {
        let Some(id) = network()
            .and_then(|network| network.nearest_vertex(x, y))
            .and_then(|id| c_int::try_from(id).ok())
        else {
            return NOT_FOUND;
        };

        // SAFETY: forwarded caller contract
        unsafe { write_i32(id_out, id) };
        SUCCESS
    })
}
