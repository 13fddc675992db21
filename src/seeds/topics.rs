//! Built-in topic table used when the configuration does not supply one

/// Topic name → high-authority starting points for that topic
pub const TOPIC_SEEDS: &[(&str, &[&str])] = &[
    (
        "javascript",
        &[
            "https://developer.mozilla.org/en-US/docs/Web/JavaScript",
            "https://javascript.info/",
            "https://stackoverflow.com/questions/tagged/javascript",
            "https://www.typescriptlang.org/",
        ],
    ),
    (
        "python",
        &[
            "https://www.python.org/",
            "https://docs.python.org/",
            "https://realpython.com/",
            "https://www.python.org/community/",
        ],
    ),
    (
        "react",
        &[
            "https://react.dev/",
            "https://stackoverflow.com/questions/tagged/reactjs",
            "https://github.com/facebook/react",
            "https://nextjs.org/",
        ],
    ),
    (
        "nodejs",
        &[
            "https://nodejs.org/",
            "https://nodejs.org/docs/",
            "https://stackoverflow.com/questions/tagged/node.js",
            "https://expressjs.com/",
        ],
    ),
    (
        "ai",
        &[
            "https://openai.com/",
            "https://en.wikipedia.org/wiki/Artificial_intelligence",
            "https://huggingface.co/",
            "https://www.anthropic.com/",
        ],
    ),
    (
        "web",
        &[
            "https://developer.mozilla.org/",
            "https://www.w3.org/",
            "https://stackoverflow.com/questions/tagged/html",
            "https://css-tricks.com/",
        ],
    ),
    (
        "database",
        &[
            "https://www.postgresql.org/",
            "https://www.mongodb.com/",
            "https://stackoverflow.com/questions/tagged/sql",
            "https://firebase.google.com/",
        ],
    ),
    (
        "api",
        &[
            "https://developer.mozilla.org/en-US/docs/Web/API",
            "https://restfulapi.net/",
            "https://swagger.io/",
            "https://graphql.org/",
        ],
    ),
    (
        "cloud",
        &[
            "https://aws.amazon.com/",
            "https://cloud.google.com/",
            "https://azure.microsoft.com/",
            "https://www.digitalocean.com/",
        ],
    ),
    (
        "devops",
        &[
            "https://www.docker.com/",
            "https://kubernetes.io/",
            "https://www.jenkins.io/",
            "https://www.terraform.io/",
        ],
    ),
    (
        "ml",
        &[
            "https://www.tensorflow.org/",
            "https://pytorch.org/",
            "https://scikit-learn.org/",
            "https://www.fast.ai/",
        ],
    ),
    (
        "security",
        &[
            "https://owasp.org/",
            "https://cwe.mitre.org/",
            "https://cheatsheetseries.owasp.org/",
            "https://portswigger.net/",
        ],
    ),
    (
        "news",
        &[
            "https://news.ycombinator.com/",
            "https://techcrunch.com/",
            "https://theverge.com/",
            "https://arstechnica.com/",
        ],
    ),
    (
        "roblox",
        &[
            "https://www.roblox.com/",
            "https://create.roblox.com/",
            "https://developer.roblox.com/",
            "https://www.roblox.com/docs/",
        ],
    ),
    (
        "game",
        &[
            "https://unity.com/",
            "https://www.unrealengine.com/",
            "https://godotengine.org/",
            "https://www.cryengine.com/",
        ],
    ),
];

/// General-purpose seeds mixed in when topic matching finds too few URLs
pub const DEFAULT_SEEDS: &[&str] = &[
    "https://en.wikipedia.org/",
    "https://developer.mozilla.org/",
    "https://stackoverflow.com/",
    "https://github.com/",
    "https://medium.com/",
];
