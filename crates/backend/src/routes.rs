use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// Configuración de todas las rutas de la aplicación
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // COMBOS DE LA CARGA INICIAL (contrato de la pantalla original)
        // ========================================
        .route(
            "/api/productos/proveedores/",
            get(handlers::a001_proveedor::list_resumen),
        )
        .route(
            "/api/productos/alicuotasiva/",
            get(handlers::a002_alicuota_iva::list_resumen),
        )
        // ========================================
        // U501 CARGA INICIAL
        // ========================================
        .route(
            "/api/proveedores/:id/carga-inicial/previsualizar/",
            post(handlers::u501_carga_inicial::previsualizar),
        )
        .route(
            "/api/proveedores/:id/carga-inicial/importar/",
            post(handlers::u501_carga_inicial::importar),
        )
        // ========================================
        // A001 Proveedor
        // ========================================
        .route(
            "/api/proveedores",
            get(handlers::a001_proveedor::list_all).post(handlers::a001_proveedor::upsert),
        )
        .route(
            "/api/proveedores/:id",
            get(handlers::a001_proveedor::get_by_id).delete(handlers::a001_proveedor::delete),
        )
        // ========================================
        // A002 Alícuota IVA
        // ========================================
        .route(
            "/api/alicuotasiva",
            get(handlers::a002_alicuota_iva::list_all).post(handlers::a002_alicuota_iva::upsert),
        )
        .route(
            "/api/alicuotasiva/:id",
            get(handlers::a002_alicuota_iva::get_by_id)
                .delete(handlers::a002_alicuota_iva::delete),
        )
        // ========================================
        // A003 Producto
        // ========================================
        .route(
            "/api/productos",
            get(handlers::a003_producto::list_all).post(handlers::a003_producto::upsert),
        )
        .route(
            "/api/productos/:id",
            get(handlers::a003_producto::get_by_id).delete(handlers::a003_producto::delete),
        )
}
