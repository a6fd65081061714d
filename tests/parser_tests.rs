use parsifal::parser::{
    BoxedParser, Parser, alphanum, character, choice, digit, failure, flat_map, identifier, item,
    letter, literal, lower, many, many_str, many1, many1_str, map, natural, pair, parse, satisfies, seq,
    seq_str, seq2, seq2_str, success,
};

#[test]
fn success_consumes_nothing() {
    assert_eq!(parse(&success(1), "abc"), Some((1, "abc")));
}

#[test]
fn failure_never_matches() {
    assert_eq!(parse(&failure::<&str, i32>(), "abc"), None);
    assert_eq!(parse(&failure::<&str, i32>(), ""), None);
}

#[test]
fn item_takes_one_symbol() {
    assert_eq!(parse(&item(), "abc"), Some(('a', "bc")));
    assert_eq!(parse(&item::<&str>(), ""), None);
}

#[test]
fn flat_map_threads_remaining_input() {
    let echo = item::<&str>().flat_map(success);
    assert_eq!(parse(&echo, "abcd"), Some(('a', "bcd")));

    let second = flat_map(item::<&str>(), |_| item());
    assert_eq!(parse(&second, "abcd"), Some(('b', "cd")));

    let failed = failure::<&str, char>().flat_map(success);
    assert_eq!(parse(&failed, "abcd"), None);
}

#[test]
fn flat_map_can_depend_on_earlier_values() {
    // a digit n followed by exactly n letters
    let counted = digit::<&str>().flat_map(|n| {
        let count = n.to_digit(10).unwrap_or(0) as usize;
        seq_str(vec![letter(); count])
    });

    assert_eq!(parse(&counted, "3abcd"), Some(("abc".to_string(), "d")));
    assert_eq!(parse(&counted, "3ab1"), None);
    assert_eq!(parse(&counted, "0abc"), Some((String::new(), "abc")));
}

#[test]
fn map_transforms_value_only() {
    let upper = map(item::<&str>(), |c| c.to_ascii_uppercase());
    assert_eq!(parse(&upper, "abc"), Some(('A', "bc")));
    assert_eq!(parse(&upper, ""), None);
}

#[test]
fn seq2_collects_both_values() {
    let two = seq2(item::<&str>(), item());
    assert_eq!(parse(&two, "abcdef"), Some((vec!['a', 'b'], "cdef")));

    let failing = seq2(failure::<&str, char>(), success('d'));
    assert_eq!(parse(&failing, "abc"), None);
}

#[test]
fn seq_collects_one_value_per_parser() {
    let three = seq([item::<&str>(), item(), item()]);
    assert_eq!(parse(&three, "abcdef"), Some((vec!['a', 'b', 'c'], "def")));

    let fail_first = seq([failure::<&str, char>(), success('d')]);
    assert_eq!(parse(&fail_first, "abc"), None);

    let fail_last = seq([success::<&str, char>('d'), failure()]);
    assert_eq!(parse(&fail_last, "abc"), None);
}

#[test]
fn empty_seq_is_empty_success() {
    let nothing = seq(Vec::<BoxedParser<&str, char>>::new());
    assert_eq!(parse(&nothing, "abc"), Some((vec![], "abc")));
}

#[test]
fn seq_str_concatenates() {
    let two = seq_str([item::<&str>(), item()]);
    assert_eq!(parse(&two, "abc"), Some(("ab".to_string(), "c")));

    let mixed = seq2_str(digit::<&str>(), letter());
    assert_eq!(parse(&mixed, "1a!"), Some(("1a".to_string(), "!")));
    assert_eq!(parse(&mixed, "a1!"), None);

    let nothing = seq_str(Vec::<BoxedParser<&str, char>>::new());
    assert_eq!(parse(&nothing, "abc"), Some((String::new(), "abc")));
}

#[test]
fn seq2_str_joins_values_of_different_types() {
    let name = seq2_str(lower::<&str>(), many_str(alphanum()));
    assert_eq!(parse(&name, "x1y2 z"), Some(("x1y2".to_string(), " z")));
    assert_eq!(parse(&name, "1xy"), None);

    let sized = seq2_str(natural::<&str>(), letter());
    assert_eq!(parse(&sized, "42 kb"), Some(("42k".to_string(), "b")));
}

#[test]
fn pair_combines_different_types() {
    let binding = pair(natural::<&str>(), identifier());
    assert_eq!(parse(&binding, "12 abc"), Some(((12, "abc".to_string()), "")));
}

#[test]
fn choice_takes_first_match() {
    let first = choice([item::<&str>(), success('d')]);
    assert_eq!(parse(&first, "abc"), Some(('a', "bc")));

    let fallback = choice([failure::<&str, char>(), success('d')]);
    assert_eq!(parse(&fallback, "abc"), Some(('d', "abc")));

    let none = choice([failure::<&str, char>(), failure()]);
    assert_eq!(parse(&none, "abc"), None);

    let empty = choice(Vec::<BoxedParser<&str, char>>::new());
    assert_eq!(parse(&empty, "abc"), None);
}

#[test]
fn choice_is_not_longest_match() {
    let short_first = choice([literal::<&str, _>("a".chars()), literal("ab".chars())]);
    assert_eq!(parse(&short_first, "abc"), Some(("a", "bc")));
}

#[test]
fn choice_replays_from_original_input() {
    let ax = seq_str([character::<&str>('a'), character('x')]);
    let ab = seq_str([character::<&str>('a'), character('b')]);
    assert_eq!(parse(&(ax | ab), "abc"), Some(("ab".to_string(), "c")));
}

#[test]
fn satisfies_checks_predicate() {
    let one = satisfies::<&str, _>(|c: &char| *c == '1');
    assert_eq!(parse(&one, "123"), Some(('1', "23")));

    let two = satisfies::<&str, _>(|c: &char| *c == '2');
    assert_eq!(parse(&two, "123"), None);
    assert_eq!(parse(&two, ""), None);
}

#[test]
fn literal_matches_exact_prefix() {
    let abc = literal::<&str, _>("abc".chars());
    assert_eq!(parse(&abc, "abcdef"), Some(("abc", "def")));

    let empty = literal::<&str, _>("".chars());
    assert_eq!(parse(&empty, "Abc"), Some(("", "Abc")));

    assert_eq!(parse(&literal::<&str, _>("abcd".chars()), "123"), None);
    assert_eq!(parse(&literal::<&str, _>("1234".chars()), "123"), None);
    assert_eq!(parse(&literal::<&str, _>("124".chars()), "123456"), None);
}

#[test]
fn many_collects_until_failure() {
    assert_eq!(parse(&many_str(digit()), "123abc"), Some(("123".to_string(), "abc")));
    assert_eq!(
        parse(&many_str(alphanum()), "123abc%*"),
        Some(("123abc".to_string(), "%*"))
    );
    assert_eq!(parse(&many_str(digit()), "abcdef"), Some((String::new(), "abcdef")));
    assert_eq!(parse(&many(digit()), "12x"), Some((vec!['1', '2'], "x")));
}

#[test]
fn many1_requires_one_match() {
    assert_eq!(parse(&many1_str(digit()), "123abc"), Some(("123".to_string(), "abc")));
    assert_eq!(
        parse(&many1_str(alphanum()), "123abc%*"),
        Some(("123abc".to_string(), "%*"))
    );
    assert_eq!(parse(&many1_str(digit()), "abcdef"), None);
    assert_eq!(parse(&many1(digit::<&str>()), ""), None);
}

#[test]
fn many_of_zero_width_parser_terminates() {
    let spin = many(success::<&str, String>(String::new()));
    assert_eq!(parse(&spin, "abc"), Some((vec![], "abc")));
}

#[test]
fn parsers_are_reusable() {
    let word = many1_str(letter::<&str>());
    let first = word.parse("hello world");
    let second = word.parse("hello world");
    assert_eq!(first, second);
    assert_eq!(first, Some(("hello".to_string(), " world")));
}

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Num(u32),
    Plus,
}

fn num<'a>() -> BoxedParser<'a, &'a [Tok], u32> {
    satisfies(|t: &Tok| matches!(t, Tok::Num(_))).map(|t| match t {
        Tok::Num(n) => n,
        Tok::Plus => 0,
    })
}

#[test]
fn slice_input_uses_the_same_combinators() {
    let tokens = [Tok::Num(1), Tok::Plus, Tok::Num(2), Tok::Plus, Tok::Num(3), Tok::Plus];

    let plus = literal([Tok::Plus]);
    let sum = num()
        .then(many(plus * num()))
        .map(|(first, rest)| first + rest.iter().sum::<u32>());

    assert_eq!(parse(&sum, &tokens[..]), Some((6, &tokens[5..])));
    assert_eq!(parse(&sum, &tokens[1..]), None);
    assert_eq!(parse(&item(), &tokens[..0]), None);
}

#[test]
fn slice_input_of_borrowed_tokens() {
    let source = String::from("let x = 1");
    let words: Vec<&str> = source.split(' ').collect();

    assert_eq!(parse(&item(), &words[..]), Some(("let", &words[1..])));

    let binding = literal(["let"]) * item() - literal(["="]);
    assert_eq!(parse(&binding, &words[..]), Some(("x", &words[3..])));
    assert_eq!(parse(&binding, &words[1..]), None);
}
