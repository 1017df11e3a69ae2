use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use markov_gen_core::model::chain::MarkovChain;
use markov_gen_core::model::generator::Generator;
use serde::Deserialize;

const DATA_DIR: &str = "./data";
const DEFAULT_WORD_LENGTH: usize = 10;
const DEFAULT_PREFIX_LENGTH: usize = 2;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	word_length: Option<usize>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	name: Option<String>,
	prefix_length: Option<usize>,
}

struct SharedData {
	generator: Option<Generator>,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a sentence from the currently loaded corpus.
/// A failed walk is reported as-is; the client may simply retry the request.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let word_length = query.word_length.unwrap_or(DEFAULT_WORD_LENGTH);

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let generator = match &shared_data.generator {
		Some(generator) => generator,
		None => return HttpResponse::Conflict().body("No corpus loaded"),
	};

	match generator.generate(word_length) {
		Ok(sentence) => HttpResponse::Ok().body(sentence),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_corpora(Path::new(DATA_DIR)) {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/model")]
async fn get_model(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match &shared_data.generator {
		Some(generator) => {
			let chain = generator.chain();
			HttpResponse::Ok().body(format!(
				"prefixes: {}\nprefix_length: {}",
				chain.len(),
				chain.prefix_length()
			))
		}
		None => HttpResponse::Conflict().body("No corpus loaded"),
	}
}

/// HTTP PUT endpoint `/v1/corpus`
///
/// Reads `./data/<name>.txt`, builds a fresh chain from it and swaps it in.
/// The previous chain, if any, is dropped.
#[put("/v1/corpus")]
async fn put_corpus(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};
	let prefix_length = query.prefix_length.unwrap_or(DEFAULT_PREFIX_LENGTH);

	let corpus_path = Path::new(DATA_DIR).join(format!("{}.txt", name));
	let text = match fs::read_to_string(&corpus_path) {
		Ok(text) => text,
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to read corpus: {e}")),
	};

	let chain = match MarkovChain::from_text(&text, prefix_length) {
		Ok(chain) => chain,
		Err(e) => return HttpResponse::BadRequest().body(format!("Failed to build chain: {e}")),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	log::info!("Loaded corpus `{}`, {} prefixes", name, chain.len());
	shared_data.generator = Some(Generator::new(chain));

	HttpResponse::Ok().body("Corpus loaded successfully")
}

/// Lists the corpus names (file stems of `.txt` files) in a directory.
fn list_corpora(dir: &Path) -> std::io::Result<Vec<String>> {
	let mut names = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(OsStr::new("txt")) {
			if let Some(stem) = path.file_stem() {
				names.push(stem.to_string_lossy().to_string());
			}
		}
	}

	Ok(names)
}

/// Main entry point for the server.
///
/// Starts with no corpus loaded; `PUT /v1/corpus?name=...` builds the first
/// chain. Each loaded chain is immutable behind the mutex, generation only
/// takes the lock to read.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData { generator: None };
	let shared_model = web::Data::new(Mutex::new(shared_data));

	log::info!("Listening on 127.0.0.1:5000");

	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(get_model)
			.service(put_corpus)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
