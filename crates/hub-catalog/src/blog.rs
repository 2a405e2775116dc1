use hub_core::BlogPost;

/// Blog archive with category filtering and title/excerpt search.
#[derive(Debug)]
pub struct Blog {
    posts: Vec<BlogPost>,
}

impl Default for Blog {
    fn default() -> Self {
        Self::new()
    }
}

impl Blog {
    pub fn new() -> Self {
        Self { posts: seed() }
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn find(&self, id: i64) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, category: &str) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn search(&self, term: &str) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.matches(term)).collect()
    }

    /// The hero post, shown above the grid.
    pub fn featured(&self) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.featured)
    }
}

fn post(
    id: i64,
    title: &str,
    excerpt: &str,
    author: &str,
    date: &str,
    category: &str,
    tags: [&str; 3],
    read_time: &str,
    featured: bool,
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: "Full article content here...".to_string(),
        author: author.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        read_time: read_time.to_string(),
        featured,
    }
}

fn seed() -> Vec<BlogPost> {
    vec![
        post(
            1,
            "The Ultimate Guide to Competitive Gaming",
            "Master the fundamentals of competitive gaming with our comprehensive guide covering strategy, mindset, and technical skills.",
            "ProGamer",
            "2024-03-10",
            "guides",
            ["strategy", "competitive", "tips"],
            "8 min read",
            true,
        ),
        post(
            2,
            "Major Tournament Announcements for 2024",
            "Get ready for the biggest gaming tournaments of the year. Here's everything you need to know about upcoming competitions.",
            "TournamentAdmin",
            "2024-03-08",
            "news",
            ["tournaments", "announcements", "2024"],
            "5 min read",
            false,
        ),
        post(
            3,
            "Building the Perfect Gaming Setup",
            "From hardware recommendations to ergonomic considerations, learn how to create a gaming setup that gives you the competitive edge.",
            "TechExpert",
            "2024-03-05",
            "guides",
            ["hardware", "setup", "peripherals"],
            "12 min read",
            false,
        ),
        post(
            4,
            "Community Spotlight: Rising Stars",
            "Meet the up-and-coming players who are making waves in our community tournaments and climbing the leaderboards.",
            "CommunityManager",
            "2024-03-03",
            "community",
            ["community", "players", "spotlight"],
            "6 min read",
            false,
        ),
        post(
            5,
            "Esports Psychology: Mental Game Mastery",
            "Discover the psychological strategies used by professional esports athletes to maintain peak performance under pressure.",
            "SportsPhD",
            "2024-03-01",
            "esports",
            ["psychology", "performance", "mindset"],
            "10 min read",
            false,
        ),
        post(
            6,
            "Game Review: Latest Releases Worth Playing",
            "Our comprehensive review of the newest games hitting the competitive scene, with insights on mechanics and competitive viability.",
            "GameCritic",
            "2024-02-28",
            "reviews",
            ["reviews", "games", "recommendations"],
            "7 min read",
            false,
        ),
    ]
}
