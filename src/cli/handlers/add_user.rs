//! User account creation handler.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;

use crate::cli::AddUserArgs;
use crate::infra::hash_password;
use crate::store::{SqliteStore, Store, StoreError};
use crate::web::forms::MIN_PASSWORD_LENGTH;

/// Creates an account from the terminal, for bootstrapping.
pub fn handle_add_user(args: &AddUserArgs, db_path: &Path) -> Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => read_password_from_stdin()?,
    };
    if password.len() < MIN_PASSWORD_LENGTH {
        bail!("password must be at least {} characters", MIN_PASSWORD_LENGTH);
    }

    let password_hash = hash_password(&password).context("failed to hash password")?;

    let mut store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database: {}", db_path.display()))?;

    let user = match store.create_user(&args.username, &password_hash) {
        Ok(user) => user,
        Err(StoreError::DuplicateUsername { username }) => {
            bail!("username already taken: {}", username);
        }
        Err(e) => return Err(e).context("failed to create user"),
    };

    println!("Created user {} ({})", user.username(), user.id());
    Ok(())
}

fn read_password_from_stdin() -> Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("password cannot be empty");
    }
    Ok(password)
}
