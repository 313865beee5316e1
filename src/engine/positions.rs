//! Арифметика очерёдности: все индексы – позиции в упорядоченном списке игроков.

/// Следующий по кругу.
pub fn next_index(current: usize, player_count: usize) -> usize {
    (current + 1) % player_count
}

/// Предыдущий по кругу.
pub fn previous_index(current: usize, player_count: usize) -> usize {
    (current + player_count - 1) % player_count
}

/// Первый игрок следующего раунда: раздача сдвигается влево на одного.
pub fn rotate_first_player(previous_first: usize, player_count: usize) -> usize {
    next_index(previous_first, player_count)
}

/// Кто выбирает козырь, если открылась Z: игрок непосредственно перед первым,
/// то есть последний в порядке хода этого раунда.
pub fn trump_chooser_index(first_player_index: usize, player_count: usize) -> usize {
    previous_index(first_player_index, player_count)
}
