use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crewseat_catalog::Seat;
use crewseat_core::models::{NewVoucher, SeatTriple, Slot, VoucherAssignment};
use crewseat_core::repository::{RepositoryError, RepositoryResult, VoucherRepository};
use sqlx::SqlitePool;

pub struct SqlVoucherRepository {
    pool: SqlitePool,
}

impl SqlVoucherRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VoucherRow {
    id: i64,
    crew_name: String,
    crew_id: String,
    flight_number: String,
    flight_date: String,
    aircraft_type: String,
    seat1: String,
    seat2: String,
    seat3: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<VoucherRow> for VoucherAssignment {
    type Error = RepositoryError;

    fn try_from(row: VoucherRow) -> Result<Self, Self::Error> {
        let parse = |label: &str| {
            label
                .parse::<Seat>()
                .map_err(|e| RepositoryError::Backend(format!("voucher {}: {}", row.id, e)))
        };

        let seats = SeatTriple([parse(&row.seat1)?, parse(&row.seat2)?, parse(&row.seat3)?]);

        Ok(VoucherAssignment {
            id: row.id,
            crew_name: row.crew_name,
            crew_id: row.crew_id,
            flight_number: row.flight_number,
            flight_date: row.flight_date,
            aircraft_type: row.aircraft_type,
            seats,
            created_at: row.created_at,
        })
    }
}

fn backend(err: sqlx::Error) -> RepositoryError {
    tracing::error!("Voucher store error: {}", err);
    RepositoryError::Backend(err.to_string())
}

fn seat_column(slot: Slot) -> &'static str {
    match slot.position() {
        1 => "seat1",
        2 => "seat2",
        _ => "seat3",
    }
}

#[async_trait]
impl VoucherRepository for SqlVoucherRepository {
    async fn exists(&self, flight_number: &str, flight_date: &str) -> RepositoryResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM vouchers WHERE flight_number = ? AND flight_date = ?",
        )
        .bind(flight_number)
        .bind(flight_date)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;

        Ok(count > 0)
    }

    async fn find(
        &self,
        flight_number: &str,
        flight_date: &str,
    ) -> RepositoryResult<Option<VoucherAssignment>> {
        let row = sqlx::query_as::<_, VoucherRow>(
            r#"
            SELECT id, crew_name, crew_id, flight_number, flight_date, aircraft_type,
                   seat1, seat2, seat3, created_at
            FROM vouchers
            WHERE flight_number = ? AND flight_date = ?
            LIMIT 1
            "#,
        )
        .bind(flight_number)
        .bind(flight_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(VoucherAssignment::try_from).transpose()
    }

    async fn insert(
        &self,
        voucher: &NewVoucher,
        seats: &SeatTriple,
        created_at: DateTime<Utc>,
    ) -> RepositoryResult<VoucherAssignment> {
        let [seat1, seat2, seat3] = seats.0.map(|seat| seat.to_string());

        let result = sqlx::query(
            r#"
            INSERT INTO vouchers (crew_name, crew_id, flight_number, flight_date, aircraft_type, seat1, seat2, seat3, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&voucher.crew_name)
        .bind(&voucher.crew_id)
        .bind(&voucher.flight_number)
        .bind(&voucher.flight_date)
        .bind(&voucher.aircraft_type)
        .bind(seat1)
        .bind(seat2)
        .bind(seat3)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let unique_violation = e
                .as_database_error()
                .is_some_and(|db| db.is_unique_violation());
            if unique_violation {
                RepositoryError::Duplicate {
                    flight_number: voucher.flight_number.clone(),
                    flight_date: voucher.flight_date.clone(),
                }
            } else {
                backend(e)
            }
        })?;

        Ok(VoucherAssignment {
            id: result.last_insert_rowid(),
            crew_name: voucher.crew_name.clone(),
            crew_id: voucher.crew_id.clone(),
            flight_number: voucher.flight_number.clone(),
            flight_date: voucher.flight_date.clone(),
            aircraft_type: voucher.aircraft_type.clone(),
            seats: *seats,
            created_at,
        })
    }

    async fn update_seat(
        &self,
        flight_number: &str,
        flight_date: &str,
        slot: Slot,
        seat: Seat,
    ) -> RepositoryResult<()> {
        let query = format!(
            "UPDATE vouchers SET {} = ? WHERE flight_number = ? AND flight_date = ?",
            seat_column(slot)
        );

        let result = sqlx::query(&query)
            .bind(seat.to_string())
            .bind(flight_number)
            .bind(flight_date)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                flight_number: flight_number.to_string(),
                flight_date: flight_date.to_string(),
            });
        }

        Ok(())
    }
}
