//! Feedback form logic: rating averages, color tiers and helper tags.
//!
//! The interactive prompts live in the binary; everything here is pure so the
//! classification rules stay testable.

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
};
#[cfg(feature = "std")]
use std::string::{String, ToString};

use rand::Rng;

use crate::config::{RATING_LOW_CEIL, RATING_MID_CEIL, TAG_CHARSET, TAG_PREFIX, TAG_SUFFIX_LEN};

/// Tri-level classification of a rating average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Low,
    Mid,
    High,
}

impl RatingTier {
    /// Classify an average. Boundaries are strict: averages below the low
    /// ceiling are `Low`, below the mid ceiling `Mid`, everything else `High`.
    pub fn classify(average: f64) -> Self {
        if average < RATING_LOW_CEIL {
            RatingTier::Low
        } else if average < RATING_MID_CEIL {
            RatingTier::Mid
        } else {
            RatingTier::High
        }
    }

    /// Display color of the tier.
    pub fn color(self) -> &'static str {
        match self {
            RatingTier::Low => "red",
            RatingTier::Mid => "orange",
            RatingTier::High => "green",
        }
    }
}

/// Mean of the three rating answers.
pub fn average_rating(r1: u8, r2: u8, r3: u8) -> f64 {
    (r1 as f64 + r2 as f64 + r3 as f64) / 3.0
}

/// Random helper tag: fixed prefix plus an uppercase-alphanumeric suffix.
pub fn helper_tag<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut tag = String::with_capacity(TAG_PREFIX.len() + TAG_SUFFIX_LEN);
    tag.push_str(TAG_PREFIX);
    for _ in 0..TAG_SUFFIX_LEN {
        let idx = rng.random_range(0..TAG_CHARSET.len());
        tag.push(TAG_CHARSET[idx] as char);
    }
    tag
}

/// One submitted form: six text/numeric fields, three 0-10 ratings and the
/// helper tag assigned on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub ratings: [u8; 3],
    pub helper_tag: String,
}

impl ContactSubmission {
    /// Assemble a submission, drawing its helper tag from `rng`.
    pub fn new<R: Rng + ?Sized>(
        name: &str,
        surname: &str,
        email: &str,
        phone: &str,
        address: &str,
        ratings: [u8; 3],
        rng: &mut R,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            surname: surname.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
            ratings,
            helper_tag: helper_tag(rng),
        }
    }

    pub fn average(&self) -> f64 {
        average_rating(self.ratings[0], self.ratings[1], self.ratings[2])
    }

    pub fn tier(&self) -> RatingTier {
        RatingTier::classify(self.average())
    }

    /// Echo the submission the way the result panel shows it.
    pub fn summary(&self) -> String {
        let average = self.average();
        format!(
            "Name: {}\nSurname: {}\nEmail: {}\nPhone number: {}\nAddress: {}\nHelper tag: {}\n{} {}: {:.1} ({})",
            self.name,
            self.surname,
            self.email,
            self.phone,
            self.address,
            self.helper_tag,
            self.name,
            self.surname,
            average,
            self.tier().color(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn top_ratings_average_high() {
        let average = average_rating(10, 10, 10);
        assert_eq!(average, 10.0);
        assert_eq!(RatingTier::classify(average), RatingTier::High);
    }

    #[test]
    fn bottom_ratings_average_low() {
        let average = average_rating(2, 2, 2);
        assert_eq!(average, 2.0);
        assert_eq!(RatingTier::classify(average), RatingTier::Low);
    }

    #[test]
    fn tier_boundaries_are_strict() {
        assert_eq!(RatingTier::classify(3.999), RatingTier::Low);
        assert_eq!(RatingTier::classify(4.0), RatingTier::Mid);
        assert_eq!(RatingTier::classify(6.999), RatingTier::Mid);
        assert_eq!(RatingTier::classify(7.0), RatingTier::High);
    }

    #[test]
    fn tier_colors() {
        assert_eq!(RatingTier::Low.color(), "red");
        assert_eq!(RatingTier::Mid.color(), "orange");
        assert_eq!(RatingTier::High.color(), "green");
    }

    #[test]
    fn helper_tag_shape() {
        let mut rng = SmallRng::seed_from_u64(8);
        let tag = helper_tag(&mut rng);
        assert!(tag.starts_with(TAG_PREFIX));
        let suffix = &tag[TAG_PREFIX.len()..];
        assert_eq!(suffix.len(), TAG_SUFFIX_LEN);
        assert!(suffix
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }

    #[test]
    fn helper_tag_is_seed_deterministic() {
        let tag1 = helper_tag(&mut SmallRng::seed_from_u64(21));
        let tag2 = helper_tag(&mut SmallRng::seed_from_u64(21));
        assert_eq!(tag1, tag2);
    }

    #[test]
    fn summary_echoes_fields_and_classified_average() {
        let mut rng = SmallRng::seed_from_u64(4);
        let submission = ContactSubmission::new(
            "Ada",
            "Lovelace",
            "ada@example.com",
            "555-0100",
            "12 Analytical Way",
            [8, 7, 9],
            &mut rng,
        );
        let summary = submission.summary();
        assert!(summary.contains("Name: Ada"));
        assert!(summary.contains("Surname: Lovelace"));
        assert!(summary.contains("Phone number: 555-0100"));
        assert!(summary.contains(&submission.helper_tag));
        assert!(summary.contains("Ada Lovelace: 8.0 (green)"));
    }

    #[test]
    fn submission_trims_text_fields() {
        let mut rng = SmallRng::seed_from_u64(4);
        let submission = ContactSubmission::new(
            "  Ada ",
            " Lovelace",
            "ada@example.com ",
            "555",
            " x ",
            [5, 5, 5],
            &mut rng,
        );
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.surname, "Lovelace");
        assert_eq!(submission.address, "x");
    }
}
