use tests::prelude::*;

use pretty_assertions::assert_eq;

use clubhouse::{driver::operation::Transaction, Error};
use std::time::Duration;

async fn commit_keeps_writes(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let place = db
        .transaction(async |db: &mut Db| {
            Ok(PlaceRegistry
                .get_or_create(db, 65199, "Wiesbaden")
                .await?
                .entity)
        })
        .await
        .unwrap();

    assert_eq!(PlaceRegistry.get(&mut db, place.id).await.unwrap(), place);
}

async fn error_rolls_back(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let err = assert_err!(
        db.transaction(async |db: &mut Db| -> clubhouse::Result<()> {
            PlaceRegistry.get_or_create(db, 65199, "Wiesbaden").await?;
            Err(Error::from_args(format_args!("changed my mind")))
        })
        .await
    );
    assert_eq!(err.to_string(), "changed my mind");

    assert_eq!(count::<Place>(&mut db).await, 0);
}

async fn nested_transaction_rolls_back_alone(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    db.transaction(async |db: &mut Db| {
        PlaceRegistry.get_or_create(db, 65199, "Wiesbaden").await?;

        let inner = db
            .transaction(async |db: &mut Db| -> clubhouse::Result<()> {
                PlaceRegistry.get_or_create(db, 10115, "Berlin").await?;
                Err(Error::from_args(format_args!("inner failure")))
            })
            .await;
        assert!(inner.is_err());

        Ok(())
    })
    .await
    .unwrap();

    let places = db.all::<Place>(Place::query()).await.unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].village, "Wiesbaden");
}

async fn slow_transaction_times_out(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let err = assert_err!(
        db.transaction_with_timeout(Duration::from_millis(20), async |db: &mut Db| {
            PlaceRegistry.get_or_create(db, 65199, "Wiesbaden").await?;
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await
    );
    assert!(err.is_transaction_timed_out(), "{err}");

    // The handle is usable again and nothing was kept
    assert_eq!(count::<Place>(&mut db).await, 0);
}

async fn timeout_inside_nested_transaction_rolls_back_everything(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let err = assert_err!(
        db.transaction_with_timeout(Duration::from_millis(20), async |db: &mut Db| {
            PlaceRegistry.get_or_create(db, 65199, "Wiesbaden").await?;

            db.transaction(async |db: &mut Db| {
                PlaceRegistry.get_or_create(db, 10115, "Berlin").await?;
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await
        })
        .await
    );
    assert!(err.is_transaction_timed_out(), "{err}");
    assert_eq!(count::<Place>(&mut db).await, 0);

    // No transaction level is left open on the connection
    assert_err!(db.exec(Transaction::Commit).await);

    db.transaction(async |db: &mut Db| {
        PlaceRegistry.get_or_create(db, 65199, "Wiesbaden").await?;
        Ok(())
    })
    .await
    .unwrap();
    assert_eq!(count::<Place>(&mut db).await, 1);
}

tests!(
    commit_keeps_writes,
    error_rolls_back,
    nested_transaction_rolls_back_alone,
    slow_transaction_times_out,
    timeout_inside_nested_transaction_rolls_back_everything,
);
