use crate::model::{NewUser, Product, User};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api";

fn endpoint(resource: &str) -> String {
    format!("{API_BASE}/{resource}")
}

fn user_endpoint(id: &str) -> String {
    endpoint(&format!("users/{id}"))
}

/// Turn a non-successful response into an error message.
async fn failure(url: &str, response: Response) -> String {
    log::warn!("Request to {url} failed: {}", response.status());

    let cause = response.text().await.unwrap_or_default();
    match cause.is_empty() {
        true => format!("{} ({})", response.status_text(), response.status()),
        false => cause,
    }
}

async fn fetch_list<T>(resource: &str) -> Result<Vec<T>, String>
where
    T: DeserializeOwned,
{
    let url = endpoint(resource);
    log::info!("fetching: {url}");

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if !response.ok() {
        return Err(failure(&url, response).await);
    }

    response
        .json()
        .await
        .map_err(|err| format!("Failed to read response: {err}"))
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    fetch_list("users").await
}

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    fetch_list("products").await
}

pub async fn create_user(user: &NewUser) -> Result<User, String> {
    let url = endpoint("users");
    log::info!("creating user: {}", user.username);

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(user)
        .map_err(|err| format!("Failed to encode request: {err}"))?
        .send()
        .await
        .map_err(|err| format!("Failed to send request: {err}"))?;

    if !response.ok() {
        return Err(failure(&url, response).await);
    }

    response
        .json()
        .await
        .map_err(|err| format!("Failed to read response: {err}"))
}

/// Delete a user, returning the id of the deleted user.
pub async fn delete_user(id: String) -> Result<String, String> {
    let url = user_endpoint(&id);
    log::info!("deleting user: {id}");

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|err| format!("Failed to send request: {err}"))?;

    if !response.ok() {
        return Err(failure(&url, response).await);
    }

    Ok(id)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(endpoint("users"), "/api/users");
        assert_eq!(endpoint("products"), "/api/products");
        assert_eq!(user_endpoint("64b0c0ffee"), "/api/users/64b0c0ffee");
    }
}
