use advert_dal::advert::{Advert, AdvertRepository, AdvertSummary, CreateAdvert};
use advert_dal::{Order, OrderField};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 1000;
pub const MAX_PICTURES: usize = 3;

/// Optional response fields a client may request on a single-advert read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Pictures,
}

/// Single-advert response shape. `main_picture` is derived on every read
/// and never persisted; cleared fields serialize as empty strings.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AdvertDetail {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub pictures: String,
    #[serde(rename = "main-picture")]
    pub main_picture: String,
}

pub struct AdvertService {
    repo: AdvertRepository,
}

impl AdvertService {
    pub fn new(repo: AdvertRepository) -> Self {
        Self { repo }
    }

    pub async fn create_advert(&self, advert: CreateAdvert) -> ApiResult<i64> {
        validate(&advert)?;
        Ok(self.repo.create(advert).await?)
    }

    pub async fn get_advert(&self, id: i64, fields: &[Field]) -> ApiResult<AdvertDetail> {
        let advert = self.repo.get(id).await?;
        Ok(project(advert, fields))
    }

    pub async fn list_adverts(&self, page: i64, order_by: &str) -> ApiResult<Vec<AdvertSummary>> {
        let order = parse_order_token(order_by)?;
        Ok(self.repo.list(page.max(1), order).await?)
    }
}

/// Checks all field rules and accumulates violations instead of failing on
/// the first one. Lengths count Unicode code points, not bytes.
fn validate(advert: &CreateAdvert) -> Result<(), ApiError> {
    let mut violations = Vec::new();

    if advert.name.chars().count() > MAX_NAME_LEN {
        violations.push(format!(
            r#"length of the field "name" should not exceed {MAX_NAME_LEN}"#
        ));
    }
    if advert.description.chars().count() > MAX_DESCRIPTION_LEN {
        violations.push(format!(
            r#"length of the field "description" should not exceed {MAX_DESCRIPTION_LEN}"#
        ));
    }
    if advert.price < 0 {
        violations.push(r#"the field "price" must have a value greater than 0"#.to_string());
    }
    if !advert.pictures.is_empty() && advert.pictures.split(',').count() > MAX_PICTURES {
        violations.push(format!(
            r#"the field "pictures" must contain no more than {MAX_PICTURES} photos"#
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(violations.join(", ")))
    }
}

/// Derives the main picture and clears the fields the client did not ask
/// for. An empty field set keeps only name, price and the main picture.
fn project(advert: Advert, fields: &[Field]) -> AdvertDetail {
    let main_picture = if advert.pictures.is_empty() {
        String::new()
    } else {
        advert
            .pictures
            .split(',')
            .next()
            .unwrap_or_default()
            .to_string()
    };

    let description = if fields.contains(&Field::Description) {
        advert.description
    } else {
        String::new()
    };
    let pictures = if fields.contains(&Field::Pictures) {
        advert.pictures
    } else {
        String::new()
    };

    AdvertDetail {
        name: advert.name,
        description,
        price: advert.price,
        pictures,
        main_picture,
    }
}

/// Splits a compound order token like `price_desc` on the first underscore.
/// Allowed values are enforced at the HTTP boundary; anything else here is
/// a programming error surfaced as `InvalidOrder`.
fn parse_order_token(token: &str) -> Result<Order, ApiError> {
    let (field, direction) = token
        .split_once('_')
        .ok_or_else(|| ApiError::InvalidOrder(token.to_string()))?;

    let field = match field {
        "price" => OrderField::Price,
        "createdat" => OrderField::CreatedAt,
        _ => return Err(ApiError::InvalidOrder(token.to_string())),
    };

    match direction {
        "asc" => Ok(Order::Asc(field)),
        "desc" => Ok(Order::Desc(field)),
        _ => Err(ApiError::InvalidOrder(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advert(pictures: &str) -> Advert {
        Advert {
            name: "bike".to_string(),
            description: "red city bike".to_string(),
            price: 100,
            pictures: pictures.to_string(),
        }
    }

    fn input(name: &str, description: &str, price: i64, pictures: &str) -> CreateAdvert {
        CreateAdvert {
            name: name.to_string(),
            description: description.to_string(),
            price,
            pictures: pictures.to_string(),
        }
    }

    #[test]
    fn valid_advert_passes() {
        assert!(validate(&input("bike", "red city bike", 100, "p1,p2")).is_ok());
    }

    #[test]
    fn boundary_lengths_pass() {
        let name = "n".repeat(200);
        let description = "d".repeat(1000);
        assert!(validate(&input(&name, &description, 0, "p1,p2,p3")).is_ok());
    }

    #[test]
    fn name_length_counts_code_points() {
        // 201 two-byte code points
        let name = "é".repeat(201);
        let err = validate(&input(&name, "d", 1, "p1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"length of the field "name" should not exceed 200"#
        );
    }

    #[test]
    fn violations_accumulate_in_fixed_order() {
        let name = "n".repeat(201);
        let err = validate(&input(&name, "d", -1, "p1,p2,p3,p4")).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"length of the field "name" should not exceed 200, the field "price" must have a value greater than 0, the field "pictures" must contain no more than 3 photos"#
        );
    }

    #[test]
    fn empty_pictures_is_not_a_violation() {
        assert!(validate(&input("bike", "d", 1, "")).is_ok());
    }

    #[test]
    fn main_picture_is_first_entry() {
        for pictures in ["p1", "p1,p2", "p1,p2,p3"] {
            let detail = project(advert(pictures), &[Field::Pictures]);
            assert_eq!(detail.main_picture, "p1");
        }
    }

    #[test]
    fn main_picture_empty_for_no_pictures() {
        let detail = project(advert(""), &[]);
        assert_eq!(detail.main_picture, "");
    }

    #[test]
    fn empty_field_set_clears_description_and_pictures() {
        let detail = project(advert("p1,p2"), &[]);
        assert_eq!(detail.description, "");
        assert_eq!(detail.pictures, "");
        assert_eq!(detail.name, "bike");
        assert_eq!(detail.price, 100);
        assert_eq!(detail.main_picture, "p1");
    }

    #[test]
    fn full_field_set_keeps_everything() {
        let detail = project(advert("p1,p2"), &[Field::Description, Field::Pictures]);
        assert_eq!(detail.description, "red city bike");
        assert_eq!(detail.pictures, "p1,p2");
    }

    #[test]
    fn pictures_only_clears_description() {
        let detail = project(advert("p1,p2"), &[Field::Pictures]);
        assert_eq!(detail.description, "");
        assert_eq!(detail.pictures, "p1,p2");
    }

    #[test]
    fn description_only_clears_pictures() {
        let detail = project(advert("p1,p2"), &[Field::Description]);
        assert_eq!(detail.description, "red city bike");
        assert_eq!(detail.pictures, "");
    }

    #[test]
    fn order_token_splits_on_first_underscore() {
        assert_eq!(
            parse_order_token("price_desc").unwrap(),
            Order::Desc(OrderField::Price)
        );
        assert_eq!(
            parse_order_token("createdat_asc").unwrap(),
            Order::Asc(OrderField::CreatedAt)
        );
    }

    #[test]
    fn unknown_order_token_is_rejected() {
        assert!(parse_order_token("name_desc").is_err());
        assert!(parse_order_token("price").is_err());
        assert!(parse_order_token("price_sideways").is_err());
    }
}
