use std::collections::HashMap;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware, put, web};

use rs_grams_core::index::ngram_index::NGramIndex;
use rs_grams_core::tokenizer::{TokenizeOptions, tokenize};
use serde::Deserialize;

/// Struct representing query parameters shared by the query endpoints
#[derive(Deserialize)]
struct QueryParams {
	n: Option<usize>, // defaults to 1 (unigrams)
}

/// Struct representing query parameters for the `/v1/frequency` endpoint
#[derive(Deserialize)]
struct FrequencyParams {
	n: Option<usize>,
	count: Option<usize>,
}

struct SharedData {
	/// Tokenized corpus, `None` until a corpus is loaded.
	tokens: Option<Vec<String>>,
	/// Indexes already built over the current corpus, by order.
	indexes: HashMap<usize, NGramIndex>,
}

impl SharedData {
	/// Returns the index of order `n`, building it from the loaded corpus
	/// on first use. Indexes are cached until the corpus is replaced.
	fn index(&mut self, n: usize) -> Result<&NGramIndex, String> {
		let tokens = match &self.tokens {
			Some(tokens) => tokens,
			None => return Err("No corpus loaded".to_owned()),
		};

		if !self.indexes.contains_key(&n) {
			let index = NGramIndex::build(tokens, n)?;
			self.indexes.insert(n, index);
		}

		// Should not panic, inserted above
		Ok(self.indexes.get(&n).unwrap())
	}
}

/// HTTP PUT endpoint `/v1/corpus`
///
/// Replaces the current corpus with the raw text of the request body,
/// tokenized with the policy given as query parameters
/// (`case_sensitive`, `include_punctuation`, both defaulting to false).
/// Any cached indexes are discarded.
#[put("/v1/corpus")]
async fn put_corpus(
	data: web::Data<Mutex<SharedData>>,
	query: web::Query<TokenizeOptions>,
	body: String,
) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};

	let tokens = tokenize(&body, &query);
	let token_count = tokens.len();

	shared_data.tokens = Some(tokens);
	shared_data.indexes.clear();

	HttpResponse::Ok().body(format!("Corpus loaded: {} tokens", token_count))
}

/// HTTP GET endpoint `/v1/ngrams`
///
/// Lists every distinct n-gram of order `n` (default 1) once, in
/// first-occurrence order, one per line.
#[get("/v1/ngrams")]
async fn get_ngrams(data: web::Data<Mutex<SharedData>>, query: web::Query<QueryParams>) -> impl Responder {
	let n = query.n.unwrap_or(1);

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};

	if shared_data.tokens.is_none() {
		return HttpResponse::Conflict().body("No corpus loaded");
	}

	match shared_data.index(n) {
		Ok(index) => HttpResponse::Ok().body(index.list_all().join("\n")),
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

/// HTTP GET endpoint `/v1/frequency`
///
/// Lists every n-gram of order `n` (default 1) whose occurrence count
/// equals `count`, one per line. A count matching nothing yields an
/// empty body, not an error.
#[get("/v1/frequency")]
async fn get_frequency(data: web::Data<Mutex<SharedData>>, query: web::Query<FrequencyParams>) -> impl Responder {
	let n = query.n.unwrap_or(1);

	let target = match query.count {
		Some(count) => count,
		None => return HttpResponse::BadRequest().body("Missing 'count' parameter"),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};

	if shared_data.tokens.is_none() {
		return HttpResponse::Conflict().body("No corpus loaded");
	}

	match shared_data.index(n) {
		Ok(index) => HttpResponse::Ok().body(index.by_frequency(target).join("\n")),
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

/// HTTP GET endpoint `/v1/most_common`
///
/// Lists the most frequent n-gram(s) of order `n` (default 1), one per
/// line. Tied maxima are all returned, in first-occurrence order.
#[get("/v1/most_common")]
async fn get_most_common(data: web::Data<Mutex<SharedData>>, query: web::Query<QueryParams>) -> impl Responder {
	let n = query.n.unwrap_or(1);

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};

	if shared_data.tokens.is_none() {
		return HttpResponse::Conflict().body("No corpus loaded");
	}

	match shared_data.index(n) {
		Ok(index) => HttpResponse::Ok().body(index.most_common().join("\n")),
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

/// HTTP GET endpoint `/v1/by_count`
///
/// Groups the n-grams of order `n` (default 1) by occurrence count and
/// returns the mapping as JSON, keys in ascending count order.
#[get("/v1/by_count")]
async fn get_by_count(data: web::Data<Mutex<SharedData>>, query: web::Query<QueryParams>) -> impl Responder {
	let n = query.n.unwrap_or(1);

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};

	if shared_data.tokens.is_none() {
		return HttpResponse::Conflict().body("No corpus loaded");
	}

	match shared_data.index(n) {
		Ok(index) => HttpResponse::Ok().json(index.by_count()),
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

/// Main entry point for the server.
///
/// Holds the tokenized corpus and its per-order indexes behind a `Mutex`,
/// and starts an Actix-web HTTP server with the corpus and query endpoints.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Currently, the bind address is hardcoded and should be made configurable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let shared_data = SharedData {
		tokens: None,
		indexes: HashMap::new(),
	};
	let shared_corpus = web::Data::new(Mutex::new(shared_data));

	log::info!("listening on 127.0.0.1:5000");

	HttpServer::new(move || {
		App::new()
			.app_data(shared_corpus.clone())
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.service(put_corpus)
			.service(get_ngrams)
			.service(get_frequency)
			.service(get_most_common)
			.service(get_by_count)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
