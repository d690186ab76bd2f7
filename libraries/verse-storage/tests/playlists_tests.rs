use verse_core::{Playlist, PlaylistId, PlaylistRegistry};
use verse_storage::{create_pool, playlists, run_migrations, SqliteStore};

#[tokio::test]
async fn test_empty_registry_lists_nothing() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let all = playlists::get_all(&pool).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_playlists_keep_insertion_order() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    for name in ["Road Trip", "Focus", "Gym"] {
        let playlist = Playlist::new(name).unwrap();
        playlists::insert(&pool, &playlist).await.unwrap();
    }

    let all = playlists::get_all(&pool).await.unwrap();
    let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Road Trip", "Focus", "Gym"]);
}

#[tokio::test]
async fn test_delete_is_a_no_op_for_absent_id() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let playlist = Playlist::new("Road Trip").unwrap();
    playlists::insert(&pool, &playlist).await.unwrap();

    playlists::delete(&pool, &PlaylistId::new("missing"))
        .await
        .unwrap();
    assert_eq!(playlists::get_all(&pool).await.unwrap().len(), 1);

    playlists::delete(&pool, &playlist.id).await.unwrap();
    assert!(playlists::get_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_registry_trait_rejects_blank_names() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    let store = SqliteStore::new(pool);

    assert!(store.create_playlist("").await.unwrap().is_none());
    assert!(store.create_playlist("   ").await.unwrap().is_none());
    assert!(store.list_playlists().await.unwrap().is_empty());

    let created = store.create_playlist("  Road Trip ").await.unwrap().unwrap();
    assert_eq!(created.name, "Road Trip");

    let all = store.list_playlists().await.unwrap();
    assert_eq!(all, vec![created]);
}
