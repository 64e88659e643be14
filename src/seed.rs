use sqlx::SqlitePool;

struct SeedPlace {
    name: &'static str,
    description: &'static str,
    location: &'static str,
    image_url: &'static str,
    views: i64,
}

struct SeedReview {
    place: &'static str,
    user_name: &'static str,
    rating: i64,
    comment: &'static str,
}

const PLACES: &[SeedPlace] = &[
    SeedPlace {
        name: "Bali Beach",
        description: "Beautiful tropical paradise with crystal clear waters.",
        location: "Bali, Indonesia",
        image_url: "/images/bali.jpg",
        views: 120,
    },
    SeedPlace {
        name: "Swiss Alps",
        description: "Majestic mountains with breathtaking views.",
        location: "Switzerland",
        image_url: "/images/swiss-alps.jpg",
        views: 95,
    },
    SeedPlace {
        name: "Santorini",
        description: "Iconic white buildings with blue domes overlooking the sea.",
        location: "Greece",
        image_url: "/images/santorini.jpg",
        views: 150,
    },
    SeedPlace {
        name: "Grand Canyon",
        description: "One of the most spectacular natural wonders of the world.",
        location: "Arizona, USA",
        image_url: "/images/grand-canyon.jpg",
        views: 200,
    },
    SeedPlace {
        name: "Kyoto Gardens",
        description: "Traditional Japanese gardens with peaceful ambiance.",
        location: "Kyoto, Japan",
        image_url: "/images/kyoto.jpg",
        views: 85,
    },
];

const REVIEWS: &[SeedReview] = &[
    SeedReview {
        place: "Bali Beach",
        user_name: "TravelFan",
        rating: 5,
        comment: "The most beautiful beach I've ever visited!",
    },
    SeedReview {
        place: "Bali Beach",
        user_name: "Adventurer123",
        rating: 4,
        comment: "Great place to relax and enjoy nature.",
    },
    SeedReview {
        place: "Swiss Alps",
        user_name: "MountainLover",
        rating: 5,
        comment: "The views are absolutely breathtaking.",
    },
];

/// Insert the sample places and reviews if the places table is empty.
///
/// Returns whether anything was inserted. All rows go in one transaction, so
/// a failure leaves the table empty and the next start tries again.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    seed_with(pool, PLACES, REVIEWS).await
}

async fn seed_with(
    pool: &SqlitePool,
    places: &[SeedPlace],
    reviews: &[SeedReview],
) -> Result<bool, sqlx::Error> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places")
        .fetch_one(pool)
        .await?;

    if count.0 > 0 {
        return Ok(false);
    }

    let now = chrono::Utc::now().to_rfc3339();
    let mut place_ids: Vec<(&str, i64)> = Vec::with_capacity(places.len());
    let mut tx = pool.begin().await?;

    for place in places {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO places (name, description, location, image_url, views, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#
        )
        .bind(place.name)
        .bind(place.description)
        .bind(place.location)
        .bind(place.image_url)
        .bind(place.views)
        .bind(&now)
        .bind(&now)
        .fetch_one(&mut *tx)
        .await?;

        place_ids.push((place.name, id));
    }

    for review in reviews {
        let Some(&(_, place_id)) = place_ids.iter().find(|(name, _)| *name == review.place) else {
            // Dropping the transaction rolls back the places inserted above.
            return Err(sqlx::Error::Configuration(
                format!("seed review references unknown place {}", review.place).into(),
            ));
        };

        sqlx::query(
            "INSERT INTO reviews (place_id, user_name, rating, comment, created_at) VALUES (?, ?, ?, ?, ?)"
        )
        .bind(place_id)
        .bind(review.user_name)
        .bind(review.rating)
        .bind(review.comment)
        .bind(&now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!("Seeded {} places and {} reviews", places.len(), reviews.len());
    Ok(true)
}
