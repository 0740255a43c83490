use rust_decimal::Decimal;

use crate::models::{Condition, Product};

/// Fixed seed catalog written on first access to the products collection.
/// The catalog is read-only; no workflow mutates it.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            title: "The Dark Side of the Moon".into(),
            artist: "Pink Floyd".into(),
            genre: "Progressive Rock".into(),
            year: 1973,
            price: Decimal::new(2999, 2),
            description: "Classic progressive rock album with superb sound and an iconic sleeve design.".into(),
            category: "Rock".into(),
            in_stock: true,
            image_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&h=400&fit=crop".into(),
            rating: 4.9,
            label: "Harvest".into(),
            condition: Condition::Vintage,
            tracks: vec![
                "Speak to Me".into(),
                "Breathe".into(),
                "On the Run".into(),
                "Time".into(),
                "The Great Gig in the Sky".into(),
                "Money".into(),
                "Us and Them".into(),
                "Any Colour You Like".into(),
                "Brain Damage".into(),
                "Eclipse".into(),
            ],
        },
        Product {
            id: "2".into(),
            title: "Kind of Blue".into(),
            artist: "Miles Davis".into(),
            genre: "Jazz".into(),
            year: 1959,
            price: Decimal::new(2499, 2),
            description: "The greatest jazz album of all time. Modal jazz performed by legendary musicians.".into(),
            category: "Jazz".into(),
            in_stock: true,
            image_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&h=400&fit=crop".into(),
            rating: 4.8,
            label: "Columbia".into(),
            condition: Condition::New,
            tracks: vec![
                "So What".into(),
                "Freddie Freeloader".into(),
                "Blue in Green".into(),
                "All Blues".into(),
                "Flamenco Sketches".into(),
            ],
        },
        Product {
            id: "3".into(),
            title: "Abbey Road".into(),
            artist: "The Beatles".into(),
            genre: "Rock".into(),
            year: 1969,
            price: Decimal::new(2799, 2),
            description: "The Beatles' legendary album; the zebra-crossing cover became a pop-culture icon.".into(),
            category: "Rock".into(),
            in_stock: true,
            image_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&h=400&fit=crop".into(),
            rating: 4.7,
            label: "Apple".into(),
            condition: Condition::Used,
            tracks: vec![
                "Come Together".into(),
                "Something".into(),
                "Maxwell's Silver Hammer".into(),
                "Oh! Darling".into(),
                "Octopus's Garden".into(),
                "I Want You (She's So Heavy)".into(),
                "Here Comes the Sun".into(),
                "Because".into(),
                "You Never Give Me Your Money".into(),
                "Sun King".into(),
                "Mean Mr. Mustard".into(),
                "Polythene Pam".into(),
                "She Came In Through the Bathroom Window".into(),
                "Golden Slumbers".into(),
                "Carry That Weight".into(),
                "The End".into(),
                "Her Majesty".into(),
            ],
        },
        Product {
            id: "4".into(),
            title: "Thriller".into(),
            artist: "Michael Jackson".into(),
            genre: "Pop".into(),
            year: 1982,
            price: Decimal::new(2299, 2),
            description: "The best-selling album of all time. Innovative sound and groundbreaking videos.".into(),
            category: "Pop".into(),
            in_stock: true,
            image_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&h=400&fit=crop".into(),
            rating: 4.9,
            label: "Epic".into(),
            condition: Condition::New,
            tracks: vec![
                "Wanna Be Startin' Somethin'".into(),
                "Baby Be Mine".into(),
                "The Girl Is Mine".into(),
                "Thriller".into(),
                "Beat It".into(),
                "Billie Jean".into(),
                "Human Nature".into(),
                "P.Y.T. (Pretty Young Thing)".into(),
                "The Lady in My Life".into(),
            ],
        },
        Product {
            id: "5".into(),
            title: "Back in Black".into(),
            artist: "AC/DC".into(),
            genre: "Hard Rock".into(),
            year: 1980,
            price: Decimal::new(2699, 2),
            description: "One of the best-selling rock albums in history, marking the band's return after Bon Scott's death.".into(),
            category: "Rock".into(),
            in_stock: false,
            image_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&h=400&fit=crop".into(),
            rating: 4.8,
            label: "Atlantic".into(),
            condition: Condition::Used,
            tracks: vec![
                "Hells Bells".into(),
                "Shoot to Thrill".into(),
                "What Do You Do for Money Honey".into(),
                "Givin the Dog a Bone".into(),
                "Let Me Put My Love into You".into(),
                "Back in Black".into(),
                "You Shook Me All Night Long".into(),
                "Have a Drink on Me".into(),
                "Shake a Leg".into(),
                "Rock and Roll Ain't Noise Pollution".into(),
            ],
        },
        Product {
            id: "6".into(),
            title: "The Wall".into(),
            artist: "Pink Floyd".into(),
            genre: "Progressive Rock".into(),
            year: 1979,
            price: Decimal::new(3199, 2),
            description: "A concept rock opera about isolation and alienation. A musical and visual masterpiece.".into(),
            category: "Rock".into(),
            in_stock: true,
            image_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&h=400&fit=crop".into(),
            rating: 4.7,
            label: "Harvest".into(),
            condition: Condition::Vintage,
            tracks: vec![
                "In the Flesh?".into(),
                "The Thin Ice".into(),
                "Another Brick in the Wall, Part 1".into(),
                "The Happiest Days of Our Lives".into(),
                "Another Brick in the Wall, Part 2".into(),
                "Mother".into(),
                "Goodbye Blue Sky".into(),
                "Empty Spaces".into(),
                "Young Lust".into(),
                "One of My Turns".into(),
                "Don't Leave Me Now".into(),
                "Another Brick in the Wall, Part 3".into(),
                "Goodbye Cruel World".into(),
            ],
        },
        Product {
            id: "7".into(),
            title: "Blue".into(),
            artist: "Joni Mitchell".into(),
            genre: "Folk".into(),
            year: 1971,
            price: Decimal::new(2399, 2),
            description: "A folk landmark. Candid lyrics and intricate musical arrangements.".into(),
            category: "Folk".into(),
            in_stock: true,
            image_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&h=400&fit=crop".into(),
            rating: 4.9,
            label: "Reprise".into(),
            condition: Condition::Vintage,
            tracks: vec![
                "All I Want".into(),
                "My Old Man".into(),
                "Little Green".into(),
                "Carey".into(),
                "Blue".into(),
                "California".into(),
                "This Flight Tonight".into(),
                "River".into(),
                "A Case of You".into(),
                "The Last Time I Saw Richard".into(),
            ],
        },
        Product {
            id: "8".into(),
            title: "Led Zeppelin IV".into(),
            artist: "Led Zeppelin".into(),
            genre: "Hard Rock".into(),
            year: 1971,
            price: Decimal::new(2899, 2),
            description: "An epic album of immortal hits, including the legendary \"Stairway to Heaven\".".into(),
            category: "Rock".into(),
            in_stock: true,
            image_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&h=400&fit=crop".into(),
            rating: 4.8,
            label: "Atlantic".into(),
            condition: Condition::Used,
            tracks: vec![
                "Black Dog".into(),
                "Rock and Roll".into(),
                "The Battle of Evermore".into(),
                "Stairway to Heaven".into(),
                "Misty Mountain Hop".into(),
                "Four Sticks".into(),
                "Going to California".into(),
                "When the Levee Breaks".into(),
            ],
        },
    ]
}
