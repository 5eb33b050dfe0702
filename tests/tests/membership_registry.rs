use tests::prelude::*;

use pretty_assertions::assert_eq;

use serde_json::json;

async fn add_member_is_idempotent(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    let club = create_club(&mut db, "Sesame Chess Club", &sesame_street()).await;
    let user = create_user(&mut db, &bert(), &sesame_street()).await;

    assert!(!MembershipRegistry.is_member(&mut db, club.id, user.id).await.unwrap());

    let first = MembershipRegistry.add_member(&mut db, club.id, user.id).await.unwrap();
    let second = MembershipRegistry.add_member(&mut db, club.id, user.id).await.unwrap();

    assert!(first.was_created);
    assert!(!second.was_created);
    assert_eq!(first.entity, second.entity);
    assert!(MembershipRegistry.is_member(&mut db, club.id, user.id).await.unwrap());
    assert_eq!(count::<Membership>(&mut db).await, 1);
}

async fn members_lists_one_club(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    let chess = create_club(&mut db, "Sesame Chess Club", &sesame_street()).await;
    let choir = create_club(&mut db, "Sesame Choir", &sesame_street()).await;
    let bert = create_user(&mut db, &bert(), &sesame_street()).await;
    let ernie = create_user(&mut db, &ernie(), &sesame_street()).await;

    MembershipRegistry.add_member(&mut db, chess.id, bert.id).await.unwrap();
    MembershipRegistry.add_member(&mut db, chess.id, ernie.id).await.unwrap();
    MembershipRegistry.add_member(&mut db, choir.id, ernie.id).await.unwrap();

    let members = MembershipRegistry.members(&mut db, chess.id).await.unwrap();
    assert_eq_unordered!(
        members.iter().map(|m| m.user_id.to_raw()),
        [bert.id.to_raw(), ernie.id.to_raw()]
    );

    let members = MembershipRegistry.members(&mut db, choir.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, ernie.id);
}

async fn request_data_is_saved_once(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    let club = create_club(&mut db, "Sesame Chess Club", &sesame_street()).await;
    let user = create_user(&mut db, &bert(), &sesame_street()).await;
    let membership = MembershipRegistry
        .add_member(&mut db, club.id, user.id)
        .await
        .unwrap()
        .entity;

    assert_none!(MembershipRegistry.request_data(&mut db, &membership).await.unwrap());

    let content = json!({ "Rating": "1200", "Favourite opening": "Sicilian" });
    let saved = MembershipRegistry
        .save_request_data(&mut db, &membership, &content)
        .await
        .unwrap();
    assert!(saved.was_created);
    assert_eq!(saved.entity.to_json().unwrap(), content);

    let again = MembershipRegistry
        .save_request_data(&mut db, &membership, &content)
        .await
        .unwrap();
    assert!(!again.was_created);
    assert_eq!(again.entity, saved.entity);

    let err = assert_err!(
        MembershipRegistry
            .save_request_data(&mut db, &membership, &json!({ "Rating": "1300" }))
            .await
    );
    assert!(err.is_unique_violation(), "{err}");

    let stored = MembershipRegistry
        .request_data(&mut db, &membership)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, saved.entity);
}

async fn unknown_user_is_rejected(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    let club = create_club(&mut db, "Sesame Chess Club", &sesame_street()).await;

    let err = assert_err!(
        MembershipRegistry
            .add_member(&mut db, club.id, Id::from_raw(42))
            .await
    );
    assert!(err.is_referential_integrity(), "{err}");
}

tests!(
    add_member_is_idempotent,
    members_lists_one_club,
    request_data_is_saved_once,
    unknown_user_is_rejected,
);
