use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;

/// Envelope retornado pela API randomuser.me
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RandomUserResponse {
    pub results: Vec<User>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct User {
    pub name: UserName,
    pub email: String,  // PRIMARY IDENTIFIER - unique per session
    pub location: Location,
    pub picture: Picture,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub cell: String,
    pub dob: DateOfBirth,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct UserName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub postcode: Postcode,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// A API devolve o CEP como número (US) ou string (outras nacionalidades)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(untagged)]
pub enum Postcode {
    Number(u64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{}", n),
            Postcode::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct Picture {
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct DateOfBirth {
    #[schema(value_type = String, format = DateTime)]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": { "title": "Ms", "first": "Brittany", "last": "Hale" },
                "location": {
                    "street": { "number": 4112, "name": "Valley View Ln" },
                    "city": "Fort Wayne",
                    "state": "Vermont",
                    "country": "United States",
                    "postcode": 61822
                },
                "email": "brittany.hale@example.com",
                "dob": { "date": "1964-05-10T03:28:42.123Z", "age": 60 },
                "phone": "(272) 790-0888",
                "cell": "(300) 436-8134",
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/3.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/3.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/3.jpg"
                },
                "nat": "US"
            },
            {
                "name": { "title": "Mr", "first": "Jake", "last": "Roy" },
                "location": {
                    "street": { "number": 7, "name": "Dieppe Ave" },
                    "city": "Stratford",
                    "state": "Nunavut",
                    "postcode": "M2K 9L1"
                },
                "email": "jake.roy@example.com",
                "dob": { "date": "1990-01-02T00:00:00Z", "age": 34 },
                "phone": "D56 L07-3344",
                "cell": "B61 Z08-2211",
                "picture": { "large": "https://randomuser.me/api/portraits/men/9.jpg" }
            }
        ],
        "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
    }"#;

    #[test]
    fn test_parses_random_user_payload() {
        let response: RandomUserResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.results.len(), 2);

        let first = &response.results[0];
        assert_eq!(first.full_name(), "Brittany Hale");
        assert_eq!(first.location.postcode, Postcode::Number(61822));
        assert_eq!(first.location.postcode.to_string(), "61822");

        let second = &response.results[1];
        assert_eq!(second.location.postcode.to_string(), "M2K 9L1");
        assert_eq!(second.picture.medium, "");
    }
}
