// tests/support/mocks.rs
//
// A single in-memory store backing all four repository traits, seeded with a
// reference fixture. It enforces the same integrity rules the real schema
// does (not-null and foreign keys on comments) so the classifier is
// exercised end to end.
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

use newsdesk::domain::article::{
    Article, ArticleId, ArticleListing, ArticleRepository, SortKey, SortOrder,
};
use newsdesk::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use newsdesk::domain::errors::{ConstraintViolation, DomainError, DomainResult};
use newsdesk::domain::topic::{Topic, TopicRepository};
use newsdesk::domain::user::{User, UserRepository};

#[derive(Debug, Clone)]
struct ArticleSeed {
    article_id: i64,
    title: &'static str,
    topic: &'static str,
    author: &'static str,
    body: &'static str,
    created_at: DateTime<Utc>,
    votes: i32,
}

pub struct InMemoryStore {
    articles: Vec<ArticleSeed>,
    comments: Mutex<Vec<Comment>>,
    next_comment_id: Mutex<i64>,
    topics: Vec<Topic>,
    users: Vec<&'static str>,
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

impl InMemoryStore {
    pub fn seeded() -> Arc<Self> {
        let articles = vec![
            ArticleSeed {
                article_id: 1,
                title: "The joy of borrow checking",
                topic: "coding",
                author: "sal_paradise",
                body: "Fighting the compiler until it fights for you.",
                created_at: at(2024, 1, 5),
                votes: 100,
            },
            ArticleSeed {
                article_id: 2,
                title: "Midfield overloads explained",
                topic: "football",
                author: "dean_m",
                body: "Why the extra man in the middle wins games.",
                created_at: at(2024, 3, 10),
                votes: 0,
            },
            ArticleSeed {
                article_id: 3,
                title: "Stock before soup",
                topic: "cooking",
                author: "camille",
                body: "A good broth forgives most other mistakes.",
                created_at: at(2024, 2, 20),
                votes: 5,
            },
        ];

        let comments = vec![
            Comment {
                comment_id: CommentId(1),
                article_id: ArticleId(1),
                author: "dean_m".into(),
                body: "Lifetimes finally clicked for me after this.".into(),
                votes: 4,
                created_at: at(2024, 1, 6),
            },
            Comment {
                comment_id: CommentId(2),
                article_id: ArticleId(1),
                author: "camille".into(),
                body: "Still fighting the compiler, to be honest.".into(),
                votes: -1,
                created_at: at(2024, 1, 7),
            },
            Comment {
                comment_id: CommentId(3),
                article_id: ArticleId(2),
                author: "sal_paradise".into(),
                body: "The diagrams made this so much clearer.".into(),
                votes: 2,
                created_at: at(2024, 3, 11),
            },
        ];

        let topics = vec![
            Topic {
                slug: "coding".into(),
                description: "Code and chatter".into(),
            },
            Topic {
                slug: "football".into(),
                description: "The beautiful game".into(),
            },
            Topic {
                slug: "cooking".into(),
                description: "Hearty food".into(),
            },
            // A topic no article references, for empty-listing coverage.
            Topic {
                slug: "history".into(),
                description: "Things that already happened".into(),
            },
        ];

        Arc::new(Self {
            articles,
            comments: Mutex::new(comments),
            next_comment_id: Mutex::new(4),
            topics,
            users: vec!["sal_paradise", "dean_m", "camille"],
        })
    }

    fn comment_count(&self, article_id: i64) -> i64 {
        self.comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| i64::from(c.article_id) == article_id)
            .count() as i64
    }

    fn materialize(&self, seed: &ArticleSeed) -> Article {
        Article {
            article_id: ArticleId(seed.article_id),
            title: seed.title.into(),
            topic: seed.topic.into(),
            author: seed.author.into(),
            body: seed.body.into(),
            created_at: seed.created_at,
            votes: seed.votes,
            comment_count: self.comment_count(seed.article_id),
        }
    }
}

pub struct MockArticleRepo {
    pub store: Arc<InMemoryStore>,
    // Vote deltas applied during a test, keyed by article id.
    deltas: Mutex<Vec<(i64, i32)>>,
}

impl MockArticleRepo {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            store,
            deltas: Mutex::new(Vec::new()),
        }
    }

    fn applied_votes(&self, article_id: i64, base: i32) -> i32 {
        let deltas = self.deltas.lock().unwrap();
        base + deltas
            .iter()
            .filter(|(id, _)| *id == article_id)
            .map(|(_, d)| d)
            .sum::<i32>()
    }
}

#[async_trait]
impl ArticleRepository for MockArticleRepo {
    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<Article>> {
        let mut articles: Vec<Article> = self
            .store
            .articles
            .iter()
            .filter(|seed| match &listing.topic {
                Some(topic) => seed.topic == topic.as_str(),
                None => true,
            })
            .map(|seed| {
                let mut article = self.store.materialize(seed);
                article.votes = self.applied_votes(seed.article_id, seed.votes);
                article
            })
            .collect();

        articles.sort_by(|a, b| {
            let ordering = match listing.sort {
                SortKey::ArticleId => a.article_id.0.cmp(&b.article_id.0),
                SortKey::Title => a.title.cmp(&b.title),
                SortKey::Topic => a.topic.cmp(&b.topic),
                SortKey::Author => a.author.cmp(&b.author),
                SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
                SortKey::Votes => a.votes.cmp(&b.votes),
                SortKey::CommentCount => a.comment_count.cmp(&b.comment_count),
            };
            match listing.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(articles)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .store
            .articles
            .iter()
            .find(|seed| seed.article_id == i64::from(id))
            .map(|seed| {
                let mut article = self.store.materialize(seed);
                article.votes = self.applied_votes(seed.article_id, seed.votes);
                article
            }))
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        Ok(self
            .store
            .articles
            .iter()
            .any(|seed| seed.article_id == i64::from(id)))
    }

    async fn increment_votes(&self, id: ArticleId, delta: i32) -> DomainResult<Option<Article>> {
        if !self.exists(id).await? {
            return Ok(None);
        }
        self.deltas.lock().unwrap().push((i64::from(id), delta));
        self.find_by_id(id).await
    }
}

pub struct MockCommentRepo {
    pub store: Arc<InMemoryStore>,
}

#[async_trait]
impl CommentRepository for MockCommentRepo {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        Ok(self
            .store
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        // Same integrity rules the schema enforces, in the same order:
        // not-null before foreign keys.
        let (author, body) = match (comment.author, comment.body) {
            (Some(author), Some(body)) => (author, body),
            _ => return Err(DomainError::Constraint(ConstraintViolation::MissingRequired)),
        };

        if !self.store.users.contains(&author.as_str()) {
            return Err(DomainError::Constraint(ConstraintViolation::ForeignKey));
        }
        let article_known = self
            .store
            .articles
            .iter()
            .any(|seed| seed.article_id == i64::from(comment.article_id));
        if !article_known {
            return Err(DomainError::Constraint(ConstraintViolation::ForeignKey));
        }

        let mut next_id = self.store.next_comment_id.lock().unwrap();
        let created = Comment {
            comment_id: CommentId(*next_id),
            article_id: comment.article_id,
            author,
            body,
            votes: 0,
            created_at: Utc::now(),
        };
        *next_id += 1;

        self.store.comments.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn exists(&self, id: CommentId) -> DomainResult<bool> {
        Ok(self
            .store
            .comments
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.comment_id == id))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let mut comments = self.store.comments.lock().unwrap();
        let position = comments.iter().position(|c| c.comment_id == id);
        Ok(position.map(|index| comments.remove(index)))
    }
}

pub struct MockTopicRepo {
    pub store: Arc<InMemoryStore>,
}

#[async_trait]
impl TopicRepository for MockTopicRepo {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        Ok(self.store.topics.clone())
    }

    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        Ok(self.store.topics.iter().any(|t| t.slug == slug))
    }
}

pub struct MockUserRepo {
    pub store: Arc<InMemoryStore>,
}

#[async_trait]
impl UserRepository for MockUserRepo {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self
            .store
            .users
            .iter()
            .map(|username| User {
                username: (*username).into(),
            })
            .collect())
    }
}
