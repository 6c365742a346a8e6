use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use snowflake_connector_rs::{
    SnowflakeAuthMethod, SnowflakeClient, SnowflakeClientConfig, SnowflakeRow, SnowflakeSession,
};
use tracing::debug;

use frosty_core::{FrostyError, QueryOutput, Value, Warehouse};

use crate::statements;
use crate::WarehouseConfig;

/// A connected warehouse session. Cloning shares the underlying session;
/// the process holds exactly one for its lifetime, re-acquired only on an
/// explicit reconnect.
#[derive(Clone)]
pub struct CortexWarehouse {
    session: Arc<SnowflakeSession>,
    database: String,
    schema: String,
}

impl CortexWarehouse {
    pub async fn connect(config: &WarehouseConfig) -> Result<Self, FrostyError> {
        let client = SnowflakeClient::new(
            &config.user,
            SnowflakeAuthMethod::Password(config.password.expose_secret().to_string()),
            SnowflakeClientConfig {
                account: config.account.clone(),
                role: Some(config.role.clone()),
                warehouse: Some(config.warehouse.clone()),
                database: Some(config.database.clone()),
                schema: Some(config.schema.clone()),
                timeout: Some(Duration::from_secs(30)),
            },
        )
        .map_err(|err| FrostyError::Warehouse(err.to_string()))?;
        let session = client
            .create_session()
            .await
            .map_err(|err| FrostyError::Warehouse(err.to_string()))?;

        Ok(Self {
            session: Arc::new(session),
            database: config.database.clone(),
            schema: config.schema.clone(),
        })
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    async fn run(&self, sql: &str) -> Result<Vec<SnowflakeRow>, FrostyError> {
        debug!(statement = sql, "warehouse query");
        self.session
            .query(sql)
            .await
            .map_err(|err| FrostyError::Warehouse(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Warehouse for CortexWarehouse {
    async fn select_namespace(&self) -> Result<(), FrostyError> {
        self.run(&statements::use_database(&self.database)).await?;
        self.run(&statements::use_schema(&self.schema)).await?;
        Ok(())
    }

    async fn query(&self, sql: &str) -> Result<QueryOutput, FrostyError> {
        let statement = statements::strip_trailing_semicolon(sql);
        let rows = self.run(statement).await?;
        Ok(rows_to_output(rows))
    }
}

fn rows_to_output(rows: Vec<SnowflakeRow>) -> QueryOutput {
    let columns: Vec<String> = rows.first().map_or_else(Vec::new, |first| {
        first
            .column_types()
            .into_iter()
            .map(|column| column.name().to_string())
            .collect()
    });

    let data = rows
        .into_iter()
        .map(|row| {
            columns
                .iter()
                .map(|name| match row.get::<Value>(name) {
                    Ok(value) => value,
                    Err(_) => match row.get::<String>(name) {
                        Ok(text) => Value::String(text),
                        Err(_) => Value::Null,
                    },
                })
                .collect()
        })
        .collect();

    QueryOutput {
        columns,
        rows: data,
    }
}
