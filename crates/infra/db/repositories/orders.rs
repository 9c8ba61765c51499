use anyhow::Result;
use async_trait::async_trait;
use diesel::{PgConnection, RunQueryDsl, insert_into, prelude::*, update};
use std::{collections::HashMap, sync::Arc};
use tokio::task;

use crate::{
    domain::{
        entities::{
            menus::MenuEntity,
            order_details::{NewOrderLine, OrderDetailEntity},
            orders::{InsertOrderEntity, OrderEntity, OrderLineWithMenu, OrderWithRelations, PlacedOrder},
            payments::{PaymentDraft, PaymentEntity},
        },
        repositories::orders::OrderRepository,
        value_objects::enums::order_statuses::OrderStatus,
    },
    infra::db::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{menus, order_details, orders, payments},
    },
};

pub struct OrderPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl OrderPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

fn attach_relations(
    conn: &mut PgConnection,
    order_rows: Vec<OrderEntity>,
    with_details: bool,
) -> QueryResult<Vec<OrderWithRelations>> {
    if order_rows.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i32> = order_rows.iter().map(|order| order.id).collect();

    let mut payments_by_order: HashMap<i32, PaymentEntity> = payments::table
        .filter(payments::order_id.eq_any(&order_ids))
        .select(PaymentEntity::as_select())
        .load::<PaymentEntity>(conn)?
        .into_iter()
        .map(|payment| (payment.order_id, payment))
        .collect();

    let mut details_by_order: HashMap<i32, Vec<OrderLineWithMenu>> = HashMap::new();
    if with_details {
        let lines = order_details::table
            .inner_join(menus::table)
            .filter(order_details::order_id.eq_any(&order_ids))
            .order(order_details::id.asc())
            .select((OrderDetailEntity::as_select(), MenuEntity::as_select()))
            .load::<(OrderDetailEntity, MenuEntity)>(conn)?;

        for (detail, menu) in lines {
            details_by_order
                .entry(detail.order_id)
                .or_default()
                .push(OrderLineWithMenu { detail, menu });
        }
    }

    Ok(order_rows
        .into_iter()
        .map(|order| OrderWithRelations {
            details: details_by_order.remove(&order.id).unwrap_or_default(),
            payment: payments_by_order.remove(&order.id),
            order,
        })
        .collect())
}

/// Order, detail rows and payment commit together or not at all.
fn insert_order_graph(
    conn: &mut PgConnection,
    order: &InsertOrderEntity,
    lines: &[NewOrderLine],
    payment: &PaymentDraft,
) -> Result<PlacedOrder> {
    conn.transaction::<_, anyhow::Error, _>(|conn| {
        let order_id = insert_into(orders::table)
            .values(order)
            .returning(orders::id)
            .get_result::<i32>(conn)?;

        let detail_rows: Vec<_> = lines.iter().map(|line| line.for_order(order_id)).collect();
        insert_into(order_details::table)
            .values(&detail_rows)
            .execute(conn)?;

        let (payment_id, transaction_code) = insert_into(payments::table)
            .values(&payment.for_order(order_id))
            .returning((payments::id, payments::transaction_code))
            .get_result::<(i32, String)>(conn)?;

        Ok(PlacedOrder {
            order_id,
            payment_id,
            transaction_code,
        })
    })
}

#[async_trait]
impl OrderRepository for OrderPostgres {
    async fn place_order(
        &self,
        order: InsertOrderEntity,
        lines: Vec<NewOrderLine>,
        payment: PaymentDraft,
    ) -> Result<PlacedOrder> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<PlacedOrder> {
            let mut conn = db_pool.get()?;

            let placed = insert_order_graph(&mut conn, &order, &lines, &payment)?;

            Ok(placed)
        })
        .await??)
    }

    async fn update_order_status(&self, order_id: i32, status: OrderStatus) -> Result<()> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<()> {
            let mut conn = db_pool.get()?;

            update(orders::table.find(order_id))
                .set(orders::order_status.eq(status.as_str()))
                .execute(&mut conn)?;

            Ok(())
        })
        .await??)
    }

    async fn update_payment_status(&self, order_id: i32, status: OrderStatus) -> Result<()> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<()> {
            let mut conn = db_pool.get()?;

            update(payments::table.filter(payments::order_id.eq(order_id)))
                .set(payments::payment_status.eq(status.as_payment_str()))
                .execute(&mut conn)?;

            Ok(())
        })
        .await??)
    }

    async fn find_payment_by_order_id(&self, order_id: i32) -> Result<Option<PaymentEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<PaymentEntity>> {
            let mut conn = db_pool.get()?;

            let row = payments::table
                .filter(payments::order_id.eq(order_id))
                .select(PaymentEntity::as_select())
                .first::<PaymentEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn find_order_by_id(
        &self,
        order_id: i32,
        with_details: bool,
    ) -> Result<Option<OrderWithRelations>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<OrderWithRelations>> {
            let mut conn = db_pool.get()?;

            let Some(order) = orders::table
                .find(order_id)
                .select(OrderEntity::as_select())
                .first::<OrderEntity>(&mut conn)
                .optional()?
            else {
                return Ok(None);
            };

            let mut loaded = attach_relations(&mut conn, vec![order], with_details)?;
            Ok(loaded.pop())
        })
        .await??)
    }

    async fn find_order_by_transaction_code(
        &self,
        transaction_code: &str,
    ) -> Result<Option<OrderEntity>> {
        let db_pool = Arc::clone(&self.db_pool);
        let transaction_code = transaction_code.to_string();

        Ok(task::spawn_blocking(move || -> Result<Option<OrderEntity>> {
            let mut conn = db_pool.get()?;

            let row = orders::table
                .inner_join(payments::table)
                .filter(payments::transaction_code.eq(transaction_code))
                .select(OrderEntity::as_select())
                .first::<OrderEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn list_orders(&self, with_details: bool) -> Result<Vec<OrderWithRelations>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Vec<OrderWithRelations>> {
            let mut conn = db_pool.get()?;

            let order_rows = orders::table
                .order(orders::id.asc())
                .select(OrderEntity::as_select())
                .load::<OrderEntity>(&mut conn)?;

            Ok(attach_relations(&mut conn, order_rows, with_details)?)
        })
        .await??)
    }
}
