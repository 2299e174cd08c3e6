//! Review types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{Entity, EntityKind, Metadata};
use crate::validation::{check_rating, require_text, ValidationResult};

/// Feedback a user leaves on a place.
///
/// `user_id` and `place_id` are fixed at creation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Review {
    #[serde(flatten)]
    pub meta: Metadata,
    pub text: String,
    pub rating: u8,
    pub user_id: String,
    pub place_id: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewReview {
    pub text: String,
    /// Must be a whole number in `1..=5`
    #[schema(example = 5)]
    pub rating: f64,
    pub user_id: String,
    pub place_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReviewPatch {
    pub text: Option<String>,
    pub rating: Option<f64>,
}

impl Review {
    pub fn new(draft: NewReview) -> ValidationResult<Self> {
        require_text("text", &draft.text)?;
        let rating = check_rating(draft.rating)?;

        Ok(Self {
            meta: Metadata::new(),
            text: draft.text,
            rating,
            user_id: draft.user_id,
            place_id: draft.place_id,
        })
    }
}

impl Entity for Review {
    const KIND: EntityKind = EntityKind::Review;
    type Patch = ReviewPatch;

    fn meta(&self) -> &Metadata {
        &self.meta
    }

    fn apply(&mut self, patch: ReviewPatch) -> ValidationResult<()> {
        if let Some(text) = &patch.text {
            require_text("text", text)?;
        }
        let rating = patch.rating.map(check_rating).transpose()?;

        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        self.meta.touch();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use rstest::rstest;

    fn great(rating: f64) -> NewReview {
        NewReview {
            text: "Great!".to_string(),
            rating,
            user_id: "u".to_string(),
            place_id: "p".to_string(),
        }
    }

    #[rstest]
    #[case(1.0)]
    #[case(5.0)]
    fn test_rating_bounds_accepted(#[case] rating: f64) {
        let review = Review::new(great(rating)).unwrap();
        assert_eq!(f64::from(review.rating), rating);
    }

    #[rstest]
    #[case(0.0)]
    #[case(6.0)]
    fn test_rating_out_of_range(#[case] rating: f64) {
        assert_eq!(
            Review::new(great(rating)).unwrap_err(),
            ValidationError::RatingOutOfRange
        );
    }

    #[test]
    fn test_text_checked_before_rating() {
        let draft = NewReview {
            text: String::new(),
            ..great(9.0)
        };
        assert_eq!(
            Review::new(draft).unwrap_err(),
            ValidationError::Required("text")
        );
    }

    #[test]
    fn test_references_are_not_patchable() {
        let mut review = Review::new(great(4.0)).unwrap();
        let patch: ReviewPatch = serde_json::from_value(serde_json::json!({
            "text": "Changed my mind",
            "user_id": "someone-else",
            "place_id": "elsewhere",
        }))
        .unwrap();
        review.apply(patch).unwrap();
        assert_eq!(review.text, "Changed my mind");
        assert_eq!(review.user_id, "u");
        assert_eq!(review.place_id, "p");
    }

    #[test]
    fn test_bad_rating_patch_keeps_text() {
        let mut review = Review::new(great(4.0)).unwrap();
        let err = review
            .apply(ReviewPatch {
                text: Some("Edited".to_string()),
                rating: Some(2.5),
            })
            .unwrap_err();
        assert_eq!(err, ValidationError::RatingNotInteger);
        assert_eq!(review.text, "Great!");
        assert_eq!(review.rating, 4);
    }
}
