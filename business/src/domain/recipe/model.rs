use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::RecipeError;
use super::value_objects::{
    CookingTime, IngredientLine, MAX_NAME_LENGTH, MAX_TAG_LENGTH, exceeds,
};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: Uuid,
    pub author_id: UserId,
    pub name: String,
    pub text: String,
    pub cooking_time: CookingTime,
    pub ingredients: Vec<IngredientLine>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewRecipeProps {
    pub author_id: UserId,
    pub name: String,
    pub text: String,
    pub cooking_time: u16,
    pub ingredients: Vec<IngredientLine>,
    pub tags: Vec<String>,
}

/// Replacement content for an existing recipe. Author, id and creation time are kept.
pub struct RecipeChanges {
    pub name: String,
    pub text: String,
    pub cooking_time: u16,
    pub ingredients: Vec<IngredientLine>,
    pub tags: Vec<String>,
}

/// Short form of a recipe, returned when it joins a cart or favorites.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub name: String,
    pub cooking_time: CookingTime,
}

/// A recipe as seen by one caller. Both flags are false for anonymous callers.
#[derive(Debug, Clone)]
pub struct RecipeView {
    pub recipe: Recipe,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

impl RecipeView {
    pub fn anonymous(recipe: Recipe) -> Self {
        Self {
            recipe,
            is_favorited: false,
            is_in_shopping_cart: false,
        }
    }
}

/// Validated, trimmed recipe content.
struct Content {
    name: String,
    text: String,
    cooking_time: CookingTime,
    ingredients: Vec<IngredientLine>,
    tags: Vec<String>,
}

impl Content {
    fn validate(changes: RecipeChanges) -> Result<Self, RecipeError> {
        let name = changes.name.trim().to_string();
        if name.is_empty() {
            return Err(RecipeError::NameEmpty);
        }
        if exceeds(&name, MAX_NAME_LENGTH) {
            return Err(RecipeError::NameTooLong);
        }
        if changes.text.trim().is_empty() {
            return Err(RecipeError::TextEmpty);
        }
        let cooking_time = CookingTime::new(changes.cooking_time)?;

        if changes.ingredients.is_empty() {
            return Err(RecipeError::NoIngredients);
        }
        let ingredients = changes
            .ingredients
            .into_iter()
            .map(|line| IngredientLine::new(line.ingredient_name, line.measurement_unit, line.amount))
            .collect::<Result<Vec<_>, _>>()?;
        let mut seen_lines = HashSet::new();
        for line in &ingredients {
            if !seen_lines.insert(line.key()) {
                return Err(RecipeError::DuplicatedIngredient);
            }
        }

        if changes.tags.is_empty() {
            return Err(RecipeError::NoTags);
        }
        let tags: Vec<String> = changes
            .tags
            .iter()
            .map(|tag| tag.trim().to_string())
            .collect();
        let mut seen_tags = HashSet::new();
        for tag in &tags {
            if tag.is_empty() {
                return Err(RecipeError::TagEmpty);
            }
            if exceeds(tag, MAX_TAG_LENGTH) {
                return Err(RecipeError::TagTooLong);
            }
            if !seen_tags.insert(tag.as_str()) {
                return Err(RecipeError::DuplicatedTag);
            }
        }

        Ok(Self {
            name,
            text: changes.text,
            cooking_time,
            ingredients,
            tags,
        })
    }
}

impl Recipe {
    pub fn new(props: NewRecipeProps) -> Result<Self, RecipeError> {
        let content = Content::validate(RecipeChanges {
            name: props.name,
            text: props.text,
            cooking_time: props.cooking_time,
            ingredients: props.ingredients,
            tags: props.tags,
        })?;

        Ok(Self {
            id: Uuid::new_v4(),
            author_id: props.author_id,
            name: content.name,
            text: content.text,
            cooking_time: content.cooking_time,
            ingredients: content.ingredients,
            tags: content.tags,
            created_at: Utc::now(),
        })
    }

    /// Replaces the editable content, validated like [`Recipe::new`].
    pub fn update(self, changes: RecipeChanges) -> Result<Self, RecipeError> {
        let content = Content::validate(changes)?;

        Ok(Self {
            name: content.name,
            text: content.text,
            cooking_time: content.cooking_time,
            ingredients: content.ingredients,
            tags: content.tags,
            ..self
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        author_id: UserId,
        name: String,
        text: String,
        cooking_time: CookingTime,
        ingredients: Vec<IngredientLine>,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            name,
            text,
            cooking_time,
            ingredients,
            tags,
            created_at,
        }
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            name: self.name.clone(),
            cooking_time: self.cooking_time,
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }
}
