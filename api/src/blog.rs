use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// structs and types

pub type PostId = u32;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub date: NaiveDate,
    pub read_minutes: u32,
    pub tags: Vec<String>,
}

impl BlogPost {
    // long-form US date, i.e. "January 15, 2024"
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    pub fn read_time(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> BlogPost {
        BlogPost {
            id: 1,
            title: "Scalable apps".into(),
            excerpt: String::new(),
            image: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            read_minutes: 8,
            tags: vec!["React".into(), "Architecture".into()],
        }
    }

    #[test]
    fn formats_publish_date() {
        assert_eq!(post().display_date(), "January 15, 2024");

        let mut early = post();
        early.date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(early.display_date(), "January 1, 2024");
    }

    #[test]
    fn formats_read_time() {
        assert_eq!(post().read_time(), "8 min read");
    }
}
