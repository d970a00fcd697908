use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use rs_lm_core::io::{list_files, read_corpus};
use rs_lm_core::model::language_model::LanguageModel;

/// Window length used when a training request does not pick one.
const DEFAULT_WINDOW_LENGTH: usize = 8;

/// Number of characters generated when a request does not pick one.
const DEFAULT_GENERATION_LENGTH: usize = 200;

/// Folder holding the plain-text corpora.
const DATA_FOLDER: &str = "./data";

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
	seed: Option<String> // -> "random", "custom:<text>" or none (random)
}

/// Struct representing query parameters for the `/v1/train` endpoint
#[derive(Deserialize)]
struct TrainParams {
	names: Option<String>,
	window_length: Option<usize>
}

struct SharedData {
	model: LanguageModel
}

/// Seed strategy for one generation request.
#[derive(Debug, PartialEq)]
enum StartSeed {
	Random,
	Custom(String),
}

impl GenerateParams {
	/// Determines the starting seed strategy for text generation.
	fn start_seed(&self) -> Result<StartSeed, String> {
		match &self.seed {
			None => Ok(StartSeed::Random),
			Some(s) if s.to_lowercase() == "random" => Ok(StartSeed::Random),
			Some(s) if s.to_lowercase().starts_with("custom:") => {
				let value = &s["custom:".len()..];
				if value.is_empty() {
					Err("Custom seed cannot be empty".into())
				} else {
					Ok(StartSeed::Custom(value.to_owned()))
				}
			}
			Some(_) => Err("Seed must start with 'custom:' or be 'random'".into()),
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates text from the shared model based on query parameters and
/// returns the seed text plus the generated characters as the response body.
/// A random seed needs a trained model; a custom seed shorter than the
/// window length comes back unchanged, as the model defines.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let length = query.length.unwrap_or(DEFAULT_GENERATION_LENGTH);

	let start_seed = match query.start_seed() {
		Ok(s) => s,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let seed_text = match start_seed {
		StartSeed::Custom(s) => s,
		StartSeed::Random => match shared_data.model.random_window() {
			Some(window) => window,
			None => return HttpResponse::Conflict().body("Model is not trained yet"),
		}
	};

	let result = shared_data.model.generate(&seed_text, length);
	HttpResponse::Ok().body(result)
}

/// HTTP GET endpoint `/v1/corpora`
///
/// Lists the corpus names available for training (".txt" files in the data
/// folder, extension stripped).
#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_files(DATA_FOLDER, "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora")
	}
}

/// HTTP GET endpoint `/v1/windows`
///
/// Returns the model's debug representation: one `window : entries` line per
/// learned window. Inspection aid, not a stable format.
#[get("/v1/windows")]
async fn get_windows(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.model.to_string())
}

/// HTTP PUT endpoint `/v1/train`
///
/// Replaces the shared model with a fresh one (optionally with a new window
/// length) and trains it on every named corpus, in order. Corpus `name`
/// resolves to `./data/<name>.txt`.
#[put("/v1/train")]
async fn put_train(data: web::Data<Mutex<SharedData>>, query: web::Query<TrainParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let window_length = query.window_length.unwrap_or(DEFAULT_WINDOW_LENGTH);
	shared_data.model = match LanguageModel::new(window_length) {
		Ok(model) => model,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	for name in corpus_names {
		let corpus_path = format!("{}/{}.txt", DATA_FOLDER, name);
		let corpus = match read_corpus(&corpus_path) {
			Ok(c) => c,
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to read corpus: {e}"))
		};
		shared_data.model.train(&corpus);
	}

	HttpResponse::Ok().body("Model trained successfully")
}

/// Main entry point for the server.
///
/// Builds an untrained model, wraps it in a `Mutex` for thread safety, and
/// starts an Actix-web HTTP server exposing it.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - The model starts empty; train it with `PUT /v1/train?names=...`.
/// - Request logs go through env_logger (set `RUST_LOG=info` to see them).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		model: LanguageModel::new(DEFAULT_WINDOW_LENGTH).expect("Default window length must be valid"),
	};
	let shared_model = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.service(get_generated)
			.service(get_corpora)
			.service(get_windows)
			.service(put_train)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
