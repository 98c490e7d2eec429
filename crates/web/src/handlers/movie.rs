//! Handlers for the `/movies` resource.

use axum::extract::State;
use catalog_core::imdb::has_imdb_code;
use catalog_core::language::Language;
use catalog_core::types::CatalogId;
use catalog_facade::models::Movie;
use serde::Serialize;
use serde_json::json;

use super::{
    all_genres, apply_row_action, picture_ids, require_id, require_no_id, required,
    resolve_genres, FormMode, RowAction,
};
use crate::converters::{
    convert_genres, convert_imdb_code, convert_languages, convert_media,
    convert_movie_total_length,
};
use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::forms::{BoundForm, FieldErrors, FieldValue, FormAction, MovieFo, TimeFo};
use crate::mappers;
use crate::results::{process, process_results};
use crate::state::AppState;
use crate::view::Page;

const LIST_PATH: &str = "/movies/list";

/// A movie with its display strings.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MovieView<'a> {
    #[serde(flatten)]
    movie: &'a Movie,
    subtitles_text: String,
    media_text: String,
    total_length: String,
    genres_text: String,
    imdb_code_text: Option<String>,
}

impl<'a> From<&'a Movie> for MovieView<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            movie,
            subtitles_text: convert_languages(&movie.subtitles),
            media_text: convert_media(&movie.media),
            total_length: convert_movie_total_length(&movie.media),
            genres_text: convert_genres(&movie.genres),
            imdb_code_text: has_imdb_code(movie.imdb_code)
                .then(|| convert_imdb_code(movie.imdb_code)),
        }
    }
}

fn list_redirect() -> Page {
    Page::redirect(LIST_PATH)
}

async fn form_page(
    state: &AppState,
    movie: &MovieFo,
    errors: &FieldErrors,
    mode: FormMode,
) -> AppResult<Page> {
    let pictures = picture_ids(state).await?;
    let genres = all_genres(state).await?;

    Ok(Page::view(
        "movie/form",
        json!({
            "movie": movie,
            "errors": errors,
            "title": mode.title("movie"),
            "languages": Language::ALL,
            "subtitles": Language::SUBTITLES,
            "pictures": pictures,
            "genres": genres,
            "action": mode.action(),
        }),
    ))
}

/// Buttons of the movie form that edit the form itself.
///
/// Anything else leaves the form and goes back to the list.
async fn process_form_action(
    state: &AppState,
    mut movie: MovieFo,
    action: FormAction,
    mode: FormMode,
) -> AppResult<Page> {
    match action {
        FormAction::AddMedium => movie.media.push(TimeFo::default()),
        FormAction::ChoosePicture => {}
        FormAction::RemovePicture => movie.picture = FieldValue::Blank,
        FormAction::RemoveMedium(index) => {
            if index >= movie.media.len() {
                return Err(AppError::IllegalArgument(format!(
                    "Medium {index} doesn't exist."
                )));
            }
            movie.media.remove(index);
        }
        _ => return Ok(list_redirect()),
    }
    form_page(state, &movie, &FieldErrors::default(), mode).await
}

/// Map a valid form back to a movie with its genres resolved.
async fn movie_from_form(state: &AppState, form: &MovieFo) -> AppResult<Movie> {
    let mut movie = mappers::movie::map_back(form)?;
    let genre_ids = FieldValue::values(&form.genres, "genres")?;
    movie.genres = resolve_genres(state, &genre_ids).await?;
    Ok(movie)
}

/// GET /movies/new
pub async fn new_data(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.movies.new_data().await)?;
    Ok(list_redirect())
}

/// GET /movies, GET /movies/list
pub async fn list(State(state): State<AppState>) -> AppResult<Page> {
    let movies = state.facades.movies.get_all().await;
    let media_count = state.facades.movies.get_total_media_count().await;
    let total_length = state.facades.movies.get_total_length().await;
    process_results(&[movies.events(), media_count.events(), total_length.events()])?;

    let movies = movies.into_data().unwrap_or_default();
    let views: Vec<MovieView> = movies.iter().map(MovieView::from).collect();

    Ok(Page::view(
        "movie/index",
        json!({
            "movies": views,
            "mediaCount": media_count.into_data().unwrap_or_default(),
            "totalLength": total_length.into_data().unwrap_or_default().to_string(),
            "title": "Movies",
        }),
    ))
}

/// GET /movies/{id}/detail
pub async fn detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let movie = required(state.facades.movies.get(id).await, "Movie")?;

    Ok(Page::view(
        "movie/detail",
        json!({
            "movie": MovieView::from(&movie),
            "title": "Movie detail",
        }),
    ))
}

/// GET /movies/add
pub async fn show_add(State(state): State<AppState>) -> AppResult<Page> {
    form_page(&state, &MovieFo::blank(), &FieldErrors::default(), FormMode::Add).await
}

/// POST /movies/add
pub async fn add(State(state): State<AppState>, bound: BoundForm<MovieFo>) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    require_no_id(form.id)?;

    if action != FormAction::Create {
        return process_form_action(&state, form, action, FormMode::Add).await;
    }
    if !errors.is_empty() {
        return form_page(&state, &form, &errors, FormMode::Add).await;
    }

    let movie = movie_from_form(&state, &form).await?;
    process(state.facades.movies.add(movie).await)?;
    Ok(list_redirect())
}

/// GET /movies/edit/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    let movie = required(state.facades.movies.get(id).await, "Movie")?;
    let form = mappers::movie::map(&movie);
    form_page(&state, &form, &FieldErrors::default(), FormMode::Edit).await
}

/// POST /movies/edit
pub async fn edit(State(state): State<AppState>, bound: BoundForm<MovieFo>) -> AppResult<Page> {
    let BoundForm {
        form,
        action,
        errors,
    } = bound;
    let id = require_id(form.id)?;

    if action != FormAction::Update {
        return process_form_action(&state, form, action, FormMode::Edit).await;
    }
    if !errors.is_empty() {
        return form_page(&state, &form, &errors, FormMode::Edit).await;
    }

    required(state.facades.movies.get(id).await, "Movie")?;
    let movie = movie_from_form(&state, &form).await?;
    process(state.facades.movies.update(movie).await)?;
    Ok(list_redirect())
}

/// GET /movies/duplicate/{id}
pub async fn duplicate(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    apply_row_action::<Movie, _>(&*state.facades.movies, id, RowAction::Duplicate).await?;
    Ok(list_redirect())
}

/// GET /movies/remove/{id}
pub async fn remove(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    apply_row_action::<Movie, _>(&*state.facades.movies, id, RowAction::Remove).await?;
    Ok(list_redirect())
}

/// GET /movies/moveUp/{id}
pub async fn move_up(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    apply_row_action::<Movie, _>(&*state.facades.movies, id, RowAction::MoveUp).await?;
    Ok(list_redirect())
}

/// GET /movies/moveDown/{id}
pub async fn move_down(
    State(state): State<AppState>,
    AppPath(id): AppPath<CatalogId>,
) -> AppResult<Page> {
    apply_row_action::<Movie, _>(&*state.facades.movies, id, RowAction::MoveDown).await?;
    Ok(list_redirect())
}

/// GET /movies/update
pub async fn update_positions(State(state): State<AppState>) -> AppResult<Page> {
    process(state.facades.movies.update_positions().await)?;
    Ok(list_redirect())
}
