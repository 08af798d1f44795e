//! C ABI of the walking-route backend.
//!
//! The map front-end loads this library, fills its pick-lists through the
//! metadata lookups, asks for a route between two vertex ids and releases the
//! returned result. No function unwinds into the caller: failures come back
//! as null handles or nonzero codes.

use std::ffi::{CStr, c_char};

mod buffer;
mod guard;
pub mod metadata;
pub mod model;
pub mod routing;

pub use metadata::{
    get_num_pontos, get_ponto_info, obter_info_vertice, obter_numero_total_vertices,
    obter_rua_vertice, obter_vertice_mais_proximo,
};
pub use routing::{RouteResult, RouteStatus, calcular_rota, calcular_rota_status, liberar_resultado};

const TEST_MESSAGE: &CStr = c"Olá! Sistema de navegação conectado com sucesso!";

/// Liveness probe; the returned string is static and must not be freed
#[unsafe(no_mangle)]
pub extern "C" fn get_test_message() -> *const c_char {
    TEST_MESSAGE.as_ptr()
}
