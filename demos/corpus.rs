use doc_similarity::{inverse_document_frequency, term_frequency, tfidf, MemorySource};

fn main() {
    // build an in-memory corpus
    let source: MemorySource = [
        ("doc1", "Rust is fast and Rust is safe."),
        ("doc2", "Python is flexible and easy."),
        ("doc3", "Rust and Python are both popular."),
    ]
    .into_iter()
    .collect();
    let corpus = ["doc1", "doc2", "doc3"];

    let tf = match term_frequency(&source, "doc1") {
        Ok(tf) => tf,
        Err(e) => {
            eprintln!("[error] {}", e);
            return;
        }
    };
    println!("tf(doc1): {:?}", tf);

    if let Ok(idf) = inverse_document_frequency(&source, &corpus) {
        for (word, idf) in idf.sorted_by_word() {
            println!("idf\t{:.4}\t{}", idf, word);
        }
    }

    match tfidf(&source, "doc1", &corpus) {
        Ok(list) => {
            for (word, score) in list {
                println!("tfidf\t{:.4}\t{}", score, word);
            }
        }
        Err(e) => eprintln!("[error] {}", e),
    }
}
