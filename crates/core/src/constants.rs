//! Shared constants for labdesk.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Table holding test objectives.
pub const OBJECTIVES_TABLE: &str = "objetivos";

/// Table holding per-category objective prices.
pub const PRICES_TABLE: &str = "precios_objetivo_tipo";

/// Table holding individual tests of a work order.
pub const TEST_ORDERS_TABLE: &str = "pruebas_ordenes_trabajo";

/// Table holding work orders.
pub const WORK_ORDERS_TABLE: &str = "ordenes_trabajo";

/// Denormalized master view over work orders and their tests.
pub const MASTER_VIEW: &str = "vistamaestratotal";

/// Default interval between background update checks (6 hours).
pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 6 * 60 * 60;

/// Default age after which a cached grid list is re-fetched.
pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 300;

/// Timeout for the update manifest request.
pub const UPDATE_REQUEST_TIMEOUT_SECS: u64 = 15;
