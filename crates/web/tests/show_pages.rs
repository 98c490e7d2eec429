//! Integration tests for shows and their seasons and episodes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, location, post_form, TestApp};

async fn app_with_show() -> TestApp {
    let app = common::build_test_app();
    app.add_genre("Drama").await;

    let body = "czechName=Kr%C3%A1lov%C3%A9&originalName=Kings&genres[0]=1&imdb=on\
&imdbCode=1234&create=Create";
    let response = post_form(&app, "/shows/add", body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/shows/list");
    app
}

async fn add_season(app: &TestApp, show_id: i32) {
    let body = "number=1&startYear=2000&endYear=2001&language=EN&subtitles[0]=CZ&create=Create";
    let uri = format!("/shows/{show_id}/seasons/add");
    let response = post_form(app, &uri, body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/shows/{show_id}/seasons/list"));
}

async fn add_episode(app: &TestApp, name: &str, minutes: u32) {
    let body = format!(
        "number=1&name={name}&length[hours]=0&length[minutes]={minutes}&length[seconds]=0&create=Create"
    );
    let response = post_form(app, "/shows/1/seasons/1/episodes/add", &body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/shows/1/seasons/1/episodes/list");
}

// ---------------------------------------------------------------------------
// Test: show list carries season and episode totals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn show_list_counts_children() {
    let app = app_with_show().await;
    add_season(&app, 1).await;
    add_episode(&app, "Pilot", 45).await;
    add_episode(&app, "Second", 40).await;

    let json = body_json(get(&app, "/shows/list", &app.admin()).await).await;
    assert_eq!(json["view"], "show/index");

    let model = &json["model"];
    assert_eq!(model["title"], "Shows");
    assert_eq!(model["seasonsCount"], 1);
    assert_eq!(model["episodesCount"], 2);
    assert_eq!(model["totalLength"], "1:25:00");

    let show = &model["shows"][0];
    assert_eq!(show["show"]["czechName"], "Králové");
    assert_eq!(show["genresText"], "Drama");
    assert_eq!(show["imdbCodeText"], "0001234");
    assert_eq!(show["seasonsCount"], 1);
    assert_eq!(show["episodesCount"], 2);
    assert_eq!(show["totalLength"], "1:25:00");
}

// ---------------------------------------------------------------------------
// Test: season pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn season_list_and_detail() {
    let app = app_with_show().await;
    add_season(&app, 1).await;

    let json = body_json(get(&app, "/shows/1/seasons", &app.admin()).await).await;
    assert_eq!(json["view"], "season/index");
    let season = &json["model"]["seasons"][0];
    assert_eq!(season["years"], "2000 - 2001");
    assert_eq!(season["subtitlesText"], "CZ");
    assert_eq!(season["episodesCount"], 0);

    let json = body_json(get(&app, "/shows/1/seasons/1/detail", &app.admin()).await).await;
    assert_eq!(json["view"], "season/detail");
    assert_eq!(json["model"]["season"]["season"]["language"], "EN");
    assert_eq!(json["model"]["show"], 1);
}

// ---------------------------------------------------------------------------
// Test: season years must be in order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn season_years_out_of_order() {
    let app = app_with_show().await;
    let body = "number=1&startYear=2005&endYear=2001&language=EN&create=Create";
    let response = post_form(&app, "/shows/1/seasons/add", body, &app.admin()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "season/form");
    assert!(json["model"]["errors"]["form"].is_array());
}

// ---------------------------------------------------------------------------
// Test: children are only reachable through their own parent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn child_must_belong_to_parent() {
    let app = app_with_show().await;
    add_season(&app, 1).await;

    let response = get(&app, "/shows/duplicate/1", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    // The duplicate copies season 1 as season 2 under show 2.
    let response = get(&app, "/shows/2/seasons/1/detail", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/shows/9/seasons/list", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/shows/2/seasons/1/episodes/list", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: episode pages and validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn episode_pages() {
    let app = app_with_show().await;
    add_season(&app, 1).await;
    add_episode(&app, "Pilot", 45).await;

    let json = body_json(get(&app, "/shows/1/seasons/1/episodes", &app.admin()).await).await;
    assert_eq!(json["view"], "episode/index");
    assert_eq!(json["model"]["episodes"][0]["name"], "Pilot");
    assert_eq!(json["model"]["episodes"][0]["lengthText"], "0:45:00");

    let json = body_json(get(&app, "/shows/1/seasons/1/episodes/edit/1", &app.admin()).await).await;
    assert_eq!(json["view"], "episode/form");
    assert_eq!(json["model"]["episode"]["length"]["minutes"], "45");

    let body = "number=1&name=Pilot&length[hours]=0&length[minutes]=0&length[seconds]=0&create=Create";
    let response = post_form(&app, "/shows/1/seasons/1/episodes/add", body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["model"]["errors"]["length.form"].is_array());
}

// ---------------------------------------------------------------------------
// Test: removing a show removes its seasons
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remove_show_cascades() {
    let app = app_with_show().await;
    add_season(&app, 1).await;

    let response = get(&app, "/shows/remove/1", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = body_json(get(&app, "/shows/list", &app.admin()).await).await;
    assert_eq!(json["model"]["seasonsCount"], 0);
    let response = get(&app, "/shows/1/seasons/list", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: choosePicture and removePicture edit the show form without saving
// ---------------------------------------------------------------------------

const SHOW_FORM: &str = "czechName=Kr%C3%A1lov%C3%A9&originalName=Kings&genres[0]=1&picture=4";

#[tokio::test]
async fn picture_buttons_edit_the_show_forms() {
    let app = app_with_show().await;

    for (uri, prefix, action) in [
        ("/shows/add", "", "add"),
        ("/shows/edit", "id=1&", "edit"),
    ] {
        let body = format!("{prefix}{SHOW_FORM}&choosePicture=Choose");
        let response = post_form(&app, uri, &body, &app.admin()).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["view"], "show/form");
        assert_eq!(json["model"]["action"], action);
        assert_eq!(json["model"]["show"]["picture"], 4);
        assert_eq!(json["model"]["errors"], serde_json::json!({}));

        let body = format!("{prefix}{SHOW_FORM}&removePicture=Remove");
        let response = post_form(&app, uri, &body, &app.admin()).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["view"], "show/form");
        assert!(json["model"]["show"]["picture"].is_null());
        assert_eq!(json["model"]["show"]["originalName"], "Kings");
        assert_eq!(json["model"]["errors"], serde_json::json!({}));
    }

    let json = body_json(get(&app, "/shows/list", &app.admin()).await).await;
    assert_eq!(json["model"]["shows"].as_array().unwrap().len(), 1);
}
