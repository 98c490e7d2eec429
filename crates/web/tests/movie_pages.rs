//! Integration tests for the movie pages.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, location, post_form, TestApp};

const VALID_MOVIE: &str = "czechName=Pel%C3%AD%C5%A1ky&originalName=Cosy+Dens&year=1999\
&language=CZ&subtitles[0]=EN&media[0][hours]=1&media[0][minutes]=55&media[0][seconds]=0\
&genres[0]=1&note=";

async fn app_with_genre() -> TestApp {
    let app = common::build_test_app();
    app.add_genre("Comedy").await;
    app
}

async fn add_movie(app: &TestApp) {
    let body = format!("{VALID_MOVIE}&create=Create");
    let response = post_form(app, "/movies/add", &body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/movies/list");
}

// ---------------------------------------------------------------------------
// Test: a valid form creates a movie that shows up in the list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_movie_and_list() {
    let app = app_with_genre().await;
    add_movie(&app).await;

    let response = get(&app, "/movies", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["view"], "movie/index");
    let model = &json["model"];
    assert_eq!(model["title"], "Movies");
    assert_eq!(model["mediaCount"], 1);
    assert_eq!(model["totalLength"], "1:55:00");

    let movie = &model["movies"][0];
    assert_eq!(movie["czechName"], "Pelíšky");
    assert_eq!(movie["id"], 1);
    assert_eq!(movie["subtitlesText"], "EN");
    assert_eq!(movie["genresText"], "Comedy");
    assert_eq!(movie["totalLength"], "1:55:00");
}

// ---------------------------------------------------------------------------
// Test: the add form starts with one medium
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_form_has_one_medium() {
    let app = app_with_genre().await;
    let json = body_json(get(&app, "/movies/add", &app.admin()).await).await;

    assert_eq!(json["view"], "movie/form");
    assert_eq!(json["model"]["title"], "Add movie");
    assert_eq!(json["model"]["action"], "add");
    assert_eq!(json["model"]["movie"]["media"].as_array().unwrap().len(), 1);
    assert_eq!(json["model"]["genres"][0]["name"], "Comedy");
    assert_eq!(json["model"]["languages"][0], "CZ");
}

// ---------------------------------------------------------------------------
// Test: an invalid form is rendered again with field errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_movie_is_rendered_with_errors() {
    let app = app_with_genre().await;
    let body = "czechName=&originalName=Cosy+Dens&year=12&media[0][hours]=25\
&media[0][minutes]=0&media[0][seconds]=0&create=Create";
    let response = post_form(&app, "/movies/add", body, &app.admin()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "movie/form");

    let errors = &json["model"]["errors"];
    assert!(errors["czechName"].is_array());
    assert!(errors["year"].is_array());
    assert!(errors["language"].is_array());
    assert!(errors["genres"].is_array());
    assert!(errors["media[0].hours"].is_array());
    // The submitted text is kept.
    assert_eq!(json["model"]["movie"]["year"], "12");

    let list = body_json(get(&app, "/movies/list", &app.admin()).await).await;
    assert!(list["model"]["movies"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: checking IMDB without a code is a form error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn imdb_flag_requires_code() {
    let app = app_with_genre().await;
    let body = format!("{VALID_MOVIE}&imdb=on&imdbCode=&create=Create");
    let json = body_json(post_form(&app, "/movies/add", &body, &app.admin()).await).await;

    assert_eq!(json["view"], "movie/form");
    assert!(json["model"]["errors"]["form"].is_array());
}

// ---------------------------------------------------------------------------
// Test: addMedium and removeMedium edit the form without saving
// ---------------------------------------------------------------------------

#[tokio::test]
async fn medium_buttons_edit_the_form() {
    let app = app_with_genre().await;

    let body = format!("{VALID_MOVIE}&addMedium=Add");
    let json = body_json(post_form(&app, "/movies/add", &body, &app.admin()).await).await;
    assert_eq!(json["view"], "movie/form");
    assert_eq!(json["model"]["movie"]["media"].as_array().unwrap().len(), 2);
    assert_eq!(json["model"]["errors"], serde_json::json!({}));

    let body = format!("{VALID_MOVIE}&removeMedium0=Remove");
    let json = body_json(post_form(&app, "/movies/add", &body, &app.admin()).await).await;
    assert!(json["model"]["movie"]["media"].as_array().unwrap().is_empty());

    let body = format!("{VALID_MOVIE}&removeMedium4=Remove");
    let response = post_form(&app, "/movies/add", &body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: cancel goes back to the list without saving
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cancel_does_not_save() {
    let app = app_with_genre().await;
    let body = format!("{VALID_MOVIE}&cancel=Cancel");
    let response = post_form(&app, "/movies/add", &body, &app.admin()).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let list = body_json(get(&app, "/movies/list", &app.admin()).await).await;
    assert!(list["model"]["movies"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: add with an id and edit without one are illegal arguments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn id_rules_on_add_and_edit() {
    let app = app_with_genre().await;

    let body = format!("id=5&{VALID_MOVIE}&create=Create");
    let response = post_form(&app, "/movies/add", &body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["view"], "errors");
    assert_eq!(json["model"]["errorMessage"], "There was error in working with data.");

    let body = format!("{VALID_MOVIE}&update=Update");
    let response = post_form(&app, "/movies/edit", &body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: edit round trip through the edit form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_movie() {
    let app = app_with_genre().await;
    add_movie(&app).await;

    let json = body_json(get(&app, "/movies/edit/1", &app.admin()).await).await;
    let form = &json["model"]["movie"];
    assert_eq!(json["model"]["title"], "Edit movie");
    assert_eq!(form["id"], 1);
    assert_eq!(form["year"], "1999");
    assert_eq!(form["media"][0]["minutes"], "55");
    assert_eq!(form["genres"][0], 1);

    let body = "id=1&czechName=Pel%C3%AD%C5%A1ky&originalName=Cosy+Dens&year=2000\
&language=CZ&media[0][hours]=2&media[0][minutes]=0&media[0][seconds]=0&genres[0]=1&update=Update";
    let response = post_form(&app, "/movies/edit", body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = body_json(get(&app, "/movies/1/detail", &app.admin()).await).await;
    assert_eq!(json["view"], "movie/detail");
    assert_eq!(json["model"]["movie"]["year"], 2000);
    assert_eq!(json["model"]["movie"]["totalLength"], "2:00:00");
}

// ---------------------------------------------------------------------------
// Test: pages for a missing movie are illegal requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_movie_is_not_found() {
    let app = app_with_genre().await;

    for uri in [
        "/movies/9/detail",
        "/movies/edit/9",
        "/movies/duplicate/9",
        "/movies/remove/9",
        "/movies/moveUp/9",
    ] {
        let response = get(&app, uri, &app.admin()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["view"], "errors");
    }
}

// ---------------------------------------------------------------------------
// Test: picking a genre that does not exist
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_genre_is_not_found() {
    let app = app_with_genre().await;
    let body = VALID_MOVIE.replace("genres[0]=1", "genres[0]=7") + "&create=Create";
    let response = post_form(&app, "/movies/add", &body, &app.admin()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: duplicate, move and remove from the list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_actions() {
    let app = app_with_genre().await;
    add_movie(&app).await;

    let response = get(&app, "/movies/duplicate/1", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/movies/list");

    let response = get(&app, "/movies/moveUp/2", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let json = body_json(get(&app, "/movies/list", &app.admin()).await).await;
    assert_eq!(json["model"]["movies"][0]["id"], 2);
    assert_eq!(json["model"]["mediaCount"], 2);

    // The first movie can't move further up.
    let response = get(&app, "/movies/moveUp/2", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    get(&app, "/movies/remove/1", &app.admin()).await;
    get(&app, "/movies/update", &app.admin()).await;
    let json = body_json(get(&app, "/movies/list", &app.admin()).await).await;
    assert_eq!(json["model"]["movies"].as_array().unwrap().len(), 1);

    let response = get(&app, "/movies/new", &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let json = body_json(get(&app, "/movies/list", &app.admin()).await).await;
    assert!(json["model"]["movies"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: repeated list keys bind like indexed ones
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_list_keys_bind() {
    let app = app_with_genre().await;
    app.add_genre("Drama").await;

    let body = "czechName=Pel%C3%AD%C5%A1ky&originalName=Cosy+Dens&year=1999&language=CZ\
&subtitles=CZ&subtitles=EN&media[0][hours]=1&media[0][minutes]=55&media[0][seconds]=0\
&genres=1&genres=2&create=Create";
    let response = post_form(&app, "/movies/add", body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = body_json(get(&app, "/movies/list", &app.admin()).await).await;
    let movie = &json["model"]["movies"][0];
    assert_eq!(movie["subtitlesText"], "CZ, EN");
    assert_eq!(movie["genresText"], "Comedy, Drama");
    assert_eq!(movie["totalLength"], "1:55:00");
}

// ---------------------------------------------------------------------------
// Test: unknown choices are field errors, not bad requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_choices_are_rendered_with_errors() {
    let app = app_with_genre().await;
    let body = VALID_MOVIE
        .replace("language=CZ", "language=XX")
        .replace("subtitles[0]=EN", "subtitles[0]=??")
        .replace("genres[0]=1", "genres[0]=comedy")
        + "&picture=abc&position=first&create=Create";
    let response = post_form(&app, "/movies/add", &body, &app.admin()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "movie/form");

    let errors = &json["model"]["errors"];
    for field in ["language", "subtitles", "genres", "picture", "position"] {
        assert!(errors[field].is_array(), "{field}");
    }
    assert_eq!(json["model"]["movie"]["language"], "XX");
    assert_eq!(json["model"]["movie"]["picture"], "abc");

    let list = body_json(get(&app, "/movies/list", &app.admin()).await).await;
    assert!(list["model"]["movies"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: choosePicture and removePicture edit the form without saving
// ---------------------------------------------------------------------------

#[tokio::test]
async fn picture_buttons_edit_the_add_form() {
    let app = app_with_genre().await;

    let body = format!("{VALID_MOVIE}&picture=3&choosePicture=Choose");
    let response = post_form(&app, "/movies/add", &body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "movie/form");
    assert_eq!(json["model"]["action"], "add");
    assert_eq!(json["model"]["movie"]["picture"], 3);
    assert_eq!(json["model"]["errors"], serde_json::json!({}));

    let body = format!("{VALID_MOVIE}&picture=3&removePicture=Remove");
    let response = post_form(&app, "/movies/add", &body, &app.admin()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["view"], "movie/form");
    assert!(json["model"]["movie"]["picture"].is_null());
    assert_eq!(json["model"]["movie"]["czechName"], "Pelíšky");
    assert_eq!(json["model"]["errors"], serde_json::json!({}));

    let list = body_json(get(&app, "/movies/list", &app.admin()).await).await;
    assert!(list["model"]["movies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn picture_buttons_edit_the_edit_form() {
    let app = app_with_genre().await;
    add_movie(&app).await;

    let body = format!("id=1&{VALID_MOVIE}&picture=3&choosePicture=Choose");
    let json = body_json(post_form(&app, "/movies/edit", &body, &app.admin()).await).await;
    assert_eq!(json["view"], "movie/form");
    assert_eq!(json["model"]["action"], "edit");
    assert_eq!(json["model"]["movie"]["id"], 1);
    assert_eq!(json["model"]["errors"], serde_json::json!({}));

    let body = format!("id=1&{VALID_MOVIE}&picture=3&removePicture=Remove");
    let json = body_json(post_form(&app, "/movies/edit", &body, &app.admin()).await).await;
    assert_eq!(json["view"], "movie/form");
    assert!(json["model"]["movie"]["picture"].is_null());
    assert_eq!(json["model"]["errors"], serde_json::json!({}));

    // Nothing was saved.
    let json = body_json(get(&app, "/movies/1/detail", &app.admin()).await).await;
    assert_eq!(json["model"]["movie"]["year"], 1999);
}
