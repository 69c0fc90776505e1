//! Bundled sample movie table and bootstrap helper.

use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Sample dataset written by `cinebot init`.
pub const SAMPLE_MOVIES: &str = r#"title,year,director,cast,genre,plot,trivia
The Matrix,1999,"Lana Wachowski, Lilly Wachowski","Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss","Action, Sci-Fi","A hacker learns that his reality is a simulation and joins a rebellion against the machines that built it.",The bullet-time effect was shot with a ring of 120 still cameras.
Inception,2010,Christopher Nolan,"Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page","Action, Sci-Fi, Thriller",A thief who steals secrets through shared dreams is hired to plant an idea instead.,The rotating hallway fight was filmed in a real rotating set.
The Dark Knight,2008,Christopher Nolan,"Christian Bale, Heath Ledger, Aaron Eckhart","Action, Crime, Drama",Batman faces the Joker as Gotham descends into chaos.,Heath Ledger kept a diary in character while preparing for the role.
Interstellar,2014,Christopher Nolan,"Matthew McConaughey, Anne Hathaway, Jessica Chastain","Drama, Sci-Fi",Explorers travel through a wormhole to find humanity a new home.,The black hole render led to published astrophysics papers.
Pulp Fiction,1994,Quentin Tarantino,"John Travolta, Uma Thurman, Samuel L. Jackson","Crime, Drama",Interlocking stories of Los Angeles criminals unfold out of order.,The contents of the briefcase are never revealed.
The Godfather,1972,Francis Ford Coppola,"Marlon Brando, Al Pacino, James Caan","Crime, Drama",The aging head of a crime family hands control to his reluctant son.,The cat in the opening scene was a stray found on the lot.
Toy Story,1995,John Lasseter,"Tom Hanks, Tim Allen","Animation, Comedy, Family",A cowboy doll feels threatened by a flashy new space ranger toy.,It was the first entirely computer-animated feature film.
Spirited Away,2001,Hayao Miyazaki,"Rumi Hiiragi, Miyu Irino","Animation, Fantasy",A girl must work in a spirit bathhouse to free her parents.,It won the Academy Award for Best Animated Feature.
The Shining,1980,Stanley Kubrick,"Jack Nicholson, Shelley Duvall",Horror,A writer caretaking an isolated hotel for the winter slowly loses his mind.,The typed pages of the manuscript were prepared by hand in several languages.
Get Out,2017,Jordan Peele,"Daniel Kaluuya, Allison Williams","Horror, Mystery, Thriller",A young man uncovers a disturbing secret when visiting his girlfriend's family.,Jordan Peele won the Oscar for Best Original Screenplay.
Superbad,2007,Greg Mottola,"Jonah Hill, Michael Cera",Comedy,Two high-school friends try to make the most of their last party before graduation.,Seth Rogen and Evan Goldberg started the script as teenagers.
Groundhog Day,1993,Harold Ramis,"Bill Murray, Andie MacDowell","Comedy, Fantasy, Romance",A weatherman relives the same day over and over.,Bill Murray was bitten by the groundhog twice during filming.
Titanic,1997,James Cameron,"Leonardo DiCaprio, Kate Winslet","Drama, Romance",Two passengers from different classes fall in love aboard the doomed ship.,The film cost more to make than the original ship cost to build.
The Notebook,2004,Nick Cassavetes,"Ryan Gosling, Rachel McAdams","Drama, Romance",An elderly man reads a love story to a woman in a nursing home.,Ryan Gosling built furniture by hand to prepare for the role.
Mad Max: Fury Road,2015,George Miller,"Tom Hardy, Charlize Theron","Action, Adventure",A drifter and a rebel warrior flee across the desert in a war rig.,Most of the vehicle stunts were performed practically.
"#;

/// Write the sample dataset to `path` when it does not exist, or always when
/// `force` is set. Returns whether the file was written.
pub fn ensure_data_file(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, SAMPLE_MOVIES)?;
    info!(path = %path.display(), "wrote sample movie table");
    Ok(true)
}
