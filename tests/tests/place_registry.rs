use tests::prelude::*;

use pretty_assertions::assert_eq;

async fn get_or_create_is_idempotent(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let first = PlaceRegistry
        .get_or_create(&mut db, 65199, "Wiesbaden")
        .await
        .unwrap();
    assert!(first.was_created);
    assert_eq!(first.entity.postcode, 65199);
    assert_eq!(first.entity.village, "Wiesbaden");

    let second = PlaceRegistry
        .get_or_create(&mut db, 65199, "Wiesbaden")
        .await
        .unwrap();
    assert!(!second.was_created);
    assert_eq!(second.entity, first.entity);

    assert_eq!(count::<Place>(&mut db).await, 1);
}

async fn key_is_postcode_and_village(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let wiesbaden = PlaceRegistry
        .get_or_create(&mut db, 65199, "Wiesbaden")
        .await
        .unwrap()
        .entity;
    let same_postcode = PlaceRegistry
        .get_or_create(&mut db, 65199, "Dotzheim")
        .await
        .unwrap();
    let same_village = PlaceRegistry
        .get_or_create(&mut db, 65183, "Wiesbaden")
        .await
        .unwrap();

    assert!(same_postcode.was_created);
    assert!(same_village.was_created);
    assert_ne!(same_postcode.entity.id, wiesbaden.id);
    assert_ne!(same_village.entity.id, wiesbaden.id);
    assert_eq!(count::<Place>(&mut db).await, 3);
}

async fn lost_insert_race_reads_back_the_winner(test: &mut DbTest) {
    let stale = StaleReadDriver::new(test.driver());
    let reads = stale.handle();
    let mut db = test.setup_db_with(stale).await;

    let winner = PlaceRegistry
        .get_or_create(&mut db, 65199, "Wiesbaden")
        .await
        .unwrap()
        .entity;

    // The lookup misses the row, as if it had been committed by a
    // concurrent request right after the read.
    test.log().clear();
    reads.hide_next("place", 1);

    let loser = PlaceRegistry
        .get_or_create(&mut db, 65199, "Wiesbaden")
        .await
        .unwrap();

    assert!(!loser.was_created);
    assert_eq!(loser.entity, winner);
    assert_eq!(reads.remaining("place"), 0);

    let log = test.log();
    assert_eq!(log.inserts_into("place"), 1);
    assert_eq!(log.unique_violations(), 1);

    assert_eq!(count::<Place>(&mut db).await, 1);
}

async fn rejects_postcode_out_of_range(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    for postcode in [-1, 100_000] {
        let err = assert_err!(PlaceRegistry.get_or_create(&mut db, postcode, "Wiesbaden").await);
        assert!(err.is_validation(), "{err}");
    }

    // Validation happens before storage is touched
    assert!(test.log().is_empty());
}

async fn rejects_bad_village(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let err = assert_err!(
        PlaceRegistry
            .get_or_create(&mut db, 98617, "Schmalkalden-Meiningen")
            .await
    );
    assert_eq!(
        err.to_string(),
        "invalid `village`: value length 22 is too long (maximum: 20)"
    );

    let err = assert_err!(PlaceRegistry.get_or_create(&mut db, 65199, "").await);
    assert!(err.is_validation());

    assert_eq!(count::<Place>(&mut db).await, 0);
}

async fn place_in_use_is_protected(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let address = AddressRegistry::default()
        .create(&mut db, &sesame_street())
        .await
        .unwrap();

    assert!(assert_ok!(PlaceRegistry.is_used(&mut db, address.place_id).await));
    assert!(!assert_ok!(
        PlaceRegistry.delete_if_unused(&mut db, address.place_id).await
    ));

    let place = assert_ok!(PlaceRegistry.get(&mut db, address.place_id).await);
    assert_eq!(place.village, "Wiesbaden");
}

tests!(
    get_or_create_is_idempotent,
    key_is_postcode_and_village,
    lost_insert_race_reads_back_the_winner,
    rejects_postcode_out_of_range,
    rejects_bad_village,
    place_in_use_is_protected,
);
