use simple_admin_db::db::connection::DbConnection;
use simple_admin_db::db::query::user::insert_user;
use simple_admin_db::model::user::NewUser;

use crate::auth::password::hash_password;
use crate::error::ServiceResult;
use crate::fake::FakeData;

use super::Seeder;

/// Plaintext shared by every seeded account; only its hash is stored.
pub const SEED_PASSWORD: &str = "123456";

/// Batch size of a default seeding run.
pub const DEFAULT_USER_COUNT: usize = 10;

pub struct UserTableSeeder {
    pub count: usize,
}

impl UserTableSeeder {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// ## Summary
    /// Generates the batch of user rows without touching the database.
    ///
    /// Each row gets a random first and last name, an email unique within
    /// `faker`'s lifetime, and the hash of [`SEED_PASSWORD`] produced by
    /// `hash`.
    ///
    /// ## Errors
    /// Returns an error if `hash` fails.
    pub fn generate<H>(&self, faker: &mut FakeData, hash: H) -> ServiceResult<Vec<NewUser>>
    where
        H: Fn(&str) -> ServiceResult<String>,
    {
        let mut rows = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            rows.push(NewUser {
                first_name: faker.first_name(),
                last_name: faker.last_name(),
                email: faker.unique_email(),
                password: hash(SEED_PASSWORD)?,
            });
        }

        Ok(rows)
    }
}

impl Default for UserTableSeeder {
    fn default() -> Self {
        Self::new(DEFAULT_USER_COUNT)
    }
}

impl Seeder for UserTableSeeder {
    async fn seed(&self, conn: &mut DbConnection<'_>) -> anyhow::Result<()> {
        let mut faker = FakeData::new();
        let rows = self.generate(&mut faker, hash_password)?;

        // Sequential inserts, no transaction: the first rejected row aborts
        // the rest of the batch and leaves earlier rows committed.
        for (idx, row) in rows.iter().enumerate() {
            let user = insert_user(conn, row).await?;
            tracing::info!(
                n = idx + 1,
                total = rows.len(),
                name = %user.full_name(),
                email = %user.email,
                "Seeded user"
            );
        }

        Ok(())
    }
}
