use warden_core::models::Document;

/// Built-in documents used when no knowledge-base file is configured.
pub fn baseline_documents() -> Vec<Document> {
    vec![
        Document {
            id: "ai_001".to_string(),
            title: "Artificial Intelligence (General)".to_string(),
            content: "Artificial Intelligence (AI) refers to computer systems that can perform \
                      tasks that typically require human intelligence, including learning, \
                      reasoning, and pattern recognition."
                .to_string(),
            source: "internal:baseline_knowledge".to_string(),
            reliability: 0.9,
        },
        Document {
            id: "ai_002".to_string(),
            title: "Artificial Intelligence (Overview)".to_string(),
            content: "AI is a field of computer science focused on building systems that can \
                      simulate intelligent behavior such as perception, decision-making, and \
                      problem-solving."
                .to_string(),
            source: "internal:overview".to_string(),
            reliability: 0.85,
        },
    ]
}
