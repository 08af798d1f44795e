//! Exercises the exported functions the way the map front-end calls them

use std::ffi::{CStr, c_char, c_int};
use std::ptr;

use rayon::prelude::*;
use rotas::*;

fn read_string(buffer: &[c_char]) -> String {
    unsafe { CStr::from_ptr(buffer.as_ptr()) }
        .to_str()
        .unwrap()
        .to_string()
}

/// Copies the ids and distance out of a route and releases it
fn take_route(handle: *mut RouteResult) -> Option<(Vec<c_int>, c_int)> {
    if handle.is_null() {
        return None;
    }
    let route = unsafe { &*handle };
    let taken = (unsafe { route.ids() }.to_vec(), route.distance_total);
    assert_eq!(taken.0.len(), usize::try_from(route.num_ids).unwrap());
    unsafe { liberar_resultado(handle) };
    Some(taken)
}

#[test]
fn test_message_is_utf8() {
    let message = unsafe { CStr::from_ptr(get_test_message()) };
    assert!(message.to_str().unwrap().contains("conectado"));
}

#[test]
fn test_route_between_points_of_interest() {
    let (ids, distance) = take_route(calcular_rota(22, 114)).unwrap();
    assert!(ids.len() >= 2);
    assert!(distance > 0);
    assert_eq!(ids.first(), Some(&22));
    assert_eq!(ids.last(), Some(&114));
    assert_eq!(distance, 756);
}

#[test]
fn test_route_endpoints() {
    let (ids, _) = take_route(calcular_rota(22, 28)).unwrap();
    assert_eq!(ids[0], 22);
    assert_eq!(*ids.last().unwrap(), 28);
}

#[test]
fn test_invalid_routes_return_null() {
    assert!(calcular_rota(22, 22).is_null());
    assert!(calcular_rota(-1, 22).is_null());
    assert!(calcular_rota(22, 120).is_null());
    assert!(calcular_rota(67, 0).is_null());
}

#[test]
fn test_release_is_safe_for_null_and_foreign_pointers() {
    unsafe { liberar_resultado(ptr::null_mut()) };

    // Never handed out by the library, so the registry ignores it
    let mut foreign = RouteResult {
        ids: ptr::null_mut(),
        num_ids: 0,
        distance_total: 0,
    };
    unsafe { liberar_resultado(&mut foreign) };

    let handle = calcular_rota(0, 1);
    assert!(!handle.is_null());
    unsafe { liberar_resultado(handle) };
}

#[test]
fn test_repeated_routes_have_equal_distance() {
    let first = take_route(calcular_rota(119, 58)).unwrap();
    let second = take_route(calcular_rota(119, 58)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_routes_do_not_share_results() {
    let pairs: Vec<(c_int, c_int)> = (22..60).map(|origin| (origin, origin + 40)).collect();

    let parallel: Vec<_> = pairs
        .par_iter()
        .map(|&(origin, destination)| take_route(calcular_rota(origin, destination)))
        .collect();
    let sequential: Vec<_> = pairs
        .iter()
        .map(|&(origin, destination)| take_route(calcular_rota(origin, destination)))
        .collect();

    assert_eq!(parallel, sequential);
    for (result, (origin, destination)) in parallel.iter().zip(&pairs) {
        let (ids, _) = result.as_ref().unwrap();
        assert_eq!(ids.first(), Some(origin));
        assert_eq!(ids.last(), Some(destination));
    }
}

#[test]
fn test_every_point_of_interest_is_listed() {
    let count = get_num_pontos();
    assert_eq!(count, 98);

    for index in 0..count {
        let mut name = [0 as c_char; 100];
        let mut category = [0 as c_char; 50];
        let (mut id, mut x, mut y) = (-1, -1, -1);
        let status = unsafe {
            get_ponto_info(
                index,
                name.as_mut_ptr(),
                100,
                category.as_mut_ptr(),
                50,
                &mut id,
                &mut x,
                &mut y,
            )
        };
        assert_eq!(status, 0, "point {index}");
        assert!(!read_string(&name).is_empty());
        assert_ne!(read_string(&category), "Esquina");
        assert!(id >= 0);
    }
}

#[test]
fn test_point_lookup_out_of_range_leaves_outputs() {
    let mut id = 1234;
    let status = unsafe {
        get_ponto_info(
            98,
            ptr::null_mut(),
            0,
            ptr::null_mut(),
            0,
            &mut id,
            ptr::null_mut(),
            ptr::null_mut(),
        )
    };
    assert_ne!(status, 0);
    assert_eq!(id, 1234);
}

#[test]
fn test_vertex_info_for_every_vertex() {
    let total = obter_numero_total_vertices();
    assert_eq!(total, 120);

    for id in 0..total {
        let (mut x, mut y) = (-1, -1);
        let status = unsafe {
            obter_info_vertice(
                id,
                ptr::null_mut(),
                0,
                ptr::null_mut(),
                0,
                &mut x,
                &mut y,
            )
        };
        assert_eq!(status, 0);
        assert!((22..=400).contains(&x));
        assert!((24..=643).contains(&y));
    }

    let status = unsafe {
        obter_info_vertice(
            total,
            ptr::null_mut(),
            0,
            ptr::null_mut(),
            0,
            ptr::null_mut(),
            ptr::null_mut(),
        )
    };
    assert_eq!(status, -1);
}

#[test]
fn test_vertex_name_truncates() {
    let mut name = [0 as c_char; 8];
    let mut category = [0 as c_char; 50];
    let status = unsafe {
        obter_info_vertice(
            22,
            name.as_mut_ptr(),
            8,
            category.as_mut_ptr(),
            50,
            ptr::null_mut(),
            ptr::null_mut(),
        )
    };
    assert_eq!(status, 0);
    assert_eq!(read_string(&name), "Pastela");
    assert_eq!(read_string(&category), "Restaurante");
}

#[test]
fn test_street_lookup() {
    let mut street = [0 as c_char; 100];

    let status = unsafe { obter_rua_vertice(22, street.as_mut_ptr(), 100) };
    assert_eq!(status, 0);
    assert_eq!(read_string(&street), "R. 7 de Setembro");

    // Corners carry the N/A placeholder
    let status = unsafe { obter_rua_vertice(0, street.as_mut_ptr(), 100) };
    assert_eq!(status, metadata::STREET_ABSENT);
    assert_eq!(read_string(&street), "");

    let status = unsafe { obter_rua_vertice(-7, street.as_mut_ptr(), 100) };
    assert_eq!(status, metadata::NOT_FOUND);
}

#[test]
fn test_nearest_vertex() {
    let mut id = -1;
    let status = unsafe { obter_vertice_mais_proximo(398, 518, &mut id) };
    assert_eq!(status, 0);
    // Esquina P
    assert_eq!(id, 15);
}
